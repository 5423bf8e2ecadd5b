//! TodoAI to-do page: list state, edit mode and theme as a reducer.
//!
//! The page keeps an ordered, in-memory list of todos. Users can add, edit,
//! complete, delete and clear them, and flip between light and dark theme.
//! Nothing is persisted; the state lives as long as the [`TodoStore`].
//!
//! - [`TodoReducer`] holds all interaction logic and is tested on its own
//! - [`TodoStore`] wraps it in the runtime store and exposes one method per
//!   user interaction
//! - [`PageView`] is what a renderer draws after each change
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoEnvironment, TodoStore};
//!
//! let mut todos = TodoStore::new(TodoEnvironment::production());
//!
//! todos.set_draft("Buy milk");
//! todos.submit();
//! let id = todos.items()[0].id;
//! todos.toggle_complete(id);
//!
//! assert_eq!(todos.state().completed_count(), 1);
//! assert!(todos.draft().is_empty());
//! ```

pub mod config;
pub mod reducer;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{EditCursorPolicy, EditTextPolicy, TodoConfig};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoRuntime, TodoStore};
pub use types::{EditMode, Theme, TodoAction, TodoId, TodoItem, TodoState};
pub use view::{NavLink, PageView, TodoRow};
