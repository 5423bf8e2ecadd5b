//! Behaviour switches for the to-do reducer.
//!
//! Defaults reproduce how the page has always behaved, except that removing
//! the item under edit now also leaves edit mode.

use crate::types::Theme;
use serde::{Deserialize, Serialize};

/// What `SaveEdit` accepts as new text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTextPolicy {
    /// Any text, including empty. Adding still rejects blank text.
    #[default]
    AllowEmpty,
    /// Blank text is ignored and the page stays in edit mode
    RejectBlank,
}

/// What happens to the edit cursor when its item is removed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCursorPolicy {
    /// `DeleteTodo` of the edited item and `ClearAll` return to idle
    #[default]
    ClearOnRemoval,
    /// The cursor is left pointing at the removed id. A later save clears
    /// it without touching any item.
    Retain,
}

/// Configuration for [`TodoReducer`](crate::TodoReducer) and [`TodoStore`](crate::TodoStore)
///
/// # Example
///
/// ```
/// use todo::{EditTextPolicy, Theme, TodoConfig};
///
/// let config = TodoConfig::default()
///     .with_edit_text(EditTextPolicy::RejectBlank)
///     .with_initial_theme(Theme::Light);
/// assert_eq!(config.edit_text, EditTextPolicy::RejectBlank);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Validation applied to saved edits
    pub edit_text: EditTextPolicy,
    /// Edit cursor behaviour on delete and clear-all
    pub edit_cursor: EditCursorPolicy,
    /// Theme a fresh page starts with
    pub initial_theme: Theme,
}

impl TodoConfig {
    /// Set the edit text policy
    #[must_use]
    pub const fn with_edit_text(mut self, policy: EditTextPolicy) -> Self {
        self.edit_text = policy;
        self
    }

    /// Set the edit cursor policy
    #[must_use]
    pub const fn with_edit_cursor(mut self, policy: EditCursorPolicy) -> Self {
        self.edit_cursor = policy;
        self
    }

    /// Set the initial theme
    #[must_use]
    pub const fn with_initial_theme(mut self, theme: Theme) -> Self {
        self.initial_theme = theme;
        self
    }
}
