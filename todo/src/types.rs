//! Domain types for the to-do page.
//!
//! The page state is an ordered list of items, an optional edit cursor, the
//! text currently in the input box and the colour theme.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a todo item
///
/// Issued by the environment's `IdGenerator`, never reused within a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw id
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text as entered, surrounding whitespace included
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was added
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Flips the completed flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Colour theme of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    Light,
    /// Dark background, the page's initial look
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the renderer should apply its `dark` presentation class
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Which operation a submit dispatches to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// No item is being edited; submit adds a new item
    Idle,
    /// The given item is being edited; submit saves over its text
    Editing(TodoId),
}

/// State of the to-do page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order
    pub items: Vec<TodoItem>,
    /// Item currently being edited, if any
    pub editing_id: Option<TodoId>,
    /// Contents of the input box
    pub draft: String,
    /// Colour theme
    pub theme: Theme,
}

impl TodoState {
    /// Creates an empty state with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state with the given theme
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Current input mode
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        match self.editing_id {
            Some(id) => EditMode::Editing(id),
            None => EditMode::Idle,
        }
    }
}

/// Everything the page can ask the reducer to do
///
/// `Submit` is what the primary button sends; the reducer routes it to
/// `AddTodo` or `SaveEdit` depending on [`EditMode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new item; ignored if `text` is blank
    AddTodo {
        /// Item text, stored as given
        text: String,
    },

    /// Remove an item
    DeleteTodo {
        /// Item to remove
        id: TodoId,
    },

    /// Flip an item's completed flag
    ToggleComplete {
        /// Item to toggle
        id: TodoId,
    },

    /// Enter edit mode for an item and load its text into the draft
    StartEdit {
        /// Item to edit
        id: TodoId,
    },

    /// Replace the edited item's text and leave edit mode
    SaveEdit {
        /// New item text
        text: String,
    },

    /// Remove every item
    ClearAll,

    /// The input box changed
    DraftChanged {
        /// New input box contents
        text: String,
    },

    /// Primary button pressed
    Submit,

    /// Switch between light and dark theme
    ToggleTheme,
}
