//! Render model handed to the page's view layer.
//!
//! Markup, styling and icons live in the renderer. This module only decides
//! what there is to show: rows, the submit label, the theme and the
//! navigation links.

use crate::types::{EditMode, Theme, TodoId, TodoState};
use serde::Serialize;

/// Labels in the header navigation bar
pub const HEADER_NAV: [&str; 5] = ["Home", "About", "Todo", "Note", "Expense Tracker"];

/// Labels in the footer navigation bar
pub const FOOTER_NAV: [&str; 4] = ["Home", "Todo", "Note", "Expense Tracker"];

/// Submit button label while idle
pub const ADD_LABEL: &str = "New Todo";

/// Submit button label while editing
pub const SAVE_LABEL: &str = "Save Todo";

/// A link to one of the sibling pages
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Text shown on the link
    pub label: &'static str,
    /// Target path
    pub href: String,
}

impl NavLink {
    /// Link whose path is derived from its label
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            href: nav_href(label),
        }
    }
}

/// `"Expense Tracker"` → `"/expense-tracker"`
///
/// Lowercases the label and replaces its first space with a hyphen.
#[must_use]
pub fn nav_href(label: &str) -> String {
    format!("/{}", label.to_lowercase().replacen(' ', "-", 1))
}

/// One row of the list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoRow {
    /// Item id, used as the row key
    pub id: TodoId,
    /// Item text
    pub text: String,
    /// Rendered struck through when set
    pub completed: bool,
    /// Row belongs to the item being edited
    pub editing: bool,
}

/// Everything the renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Active theme
    pub theme: Theme,
    /// Apply the `dark` class to the document root
    pub dark: bool,
    /// Input box contents
    pub draft: String,
    /// Primary button label
    pub submit_label: &'static str,
    /// List rows in display order
    pub rows: Vec<TodoRow>,
    /// Header navigation
    pub header_links: Vec<NavLink>,
    /// Footer navigation
    pub footer_links: Vec<NavLink>,
}

impl From<&TodoState> for PageView {
    fn from(state: &TodoState) -> Self {
        let submit_label = match state.mode() {
            EditMode::Idle => ADD_LABEL,
            EditMode::Editing(_) => SAVE_LABEL,
        };

        Self {
            theme: state.theme,
            dark: state.theme.is_dark(),
            draft: state.draft.clone(),
            submit_label,
            rows: state
                .items
                .iter()
                .map(|item| TodoRow {
                    id: item.id,
                    text: item.text.clone(),
                    completed: item.completed,
                    editing: state.editing_id == Some(item.id),
                })
                .collect(),
            header_links: HEADER_NAV.into_iter().map(NavLink::new).collect(),
            footer_links: FOOTER_NAV.into_iter().map(NavLink::new).collect(),
        }
    }
}
