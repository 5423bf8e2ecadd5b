//! `TodoStore`: the page-facing API over the runtime store.
//!
//! Each method is one user interaction. None of them fail; input that does
//! not apply is ignored by the reducer.

use crate::config::TodoConfig;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{EditMode, Theme, TodoAction, TodoId, TodoItem, TodoState};
use crate::view::PageView;
use todoai_runtime::{Store, StoreConfig, SubscriptionId};

/// The runtime store specialised to the to-do page
pub type TodoRuntime = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// In-memory to-do list for one page session
///
/// # Example
///
/// ```
/// use todo::{EditMode, TodoEnvironment, TodoStore};
///
/// let mut todos = TodoStore::new(TodoEnvironment::production());
/// todos.add("Buy milk");
/// let id = todos.items()[0].id;
///
/// todos.start_edit(id);
/// assert_eq!(todos.mode(), EditMode::Editing(id));
/// todos.save_edit("Buy oat milk");
///
/// assert_eq!(todos.items()[0].text, "Buy oat milk");
/// assert_eq!(todos.mode(), EditMode::Idle);
/// ```
pub struct TodoStore {
    store: TodoRuntime,
}

impl TodoStore {
    /// Creates an empty store with the default configuration
    #[must_use]
    pub fn new(env: TodoEnvironment) -> Self {
        Self::with_config(env, TodoConfig::default())
    }

    /// Creates an empty store with the given configuration
    #[must_use]
    pub fn with_config(env: TodoEnvironment, config: TodoConfig) -> Self {
        Self::with_store_config(env, config, StoreConfig::default())
    }

    /// Creates an empty store, also configuring the runtime
    #[must_use]
    pub fn with_store_config(
        env: TodoEnvironment,
        config: TodoConfig,
        store_config: StoreConfig,
    ) -> Self {
        let state = TodoState::with_theme(config.initial_theme);
        Self {
            store: Store::with_config(state, TodoReducer::with_config(config), env, store_config),
        }
    }

    /// Dispatch a raw action
    ///
    /// The typed methods below are thin wrappers over this.
    pub fn dispatch(&mut self, action: TodoAction) {
        if let Err(error) = self.store.send(action) {
            tracing::error!(%error, "Dispatch aborted");
        }
    }

    /// Append a todo unless `text` is blank
    pub fn add(&mut self, text: impl Into<String>) {
        self.dispatch(TodoAction::AddTodo { text: text.into() });
    }

    /// Remove the todo with `id`, if present
    pub fn delete(&mut self, id: TodoId) {
        self.dispatch(TodoAction::DeleteTodo { id });
    }

    /// Flip the completed flag of the todo with `id`, if present
    pub fn toggle_complete(&mut self, id: TodoId) {
        self.dispatch(TodoAction::ToggleComplete { id });
    }

    /// Start editing the todo with `id`, if present
    pub fn start_edit(&mut self, id: TodoId) {
        self.dispatch(TodoAction::StartEdit { id });
    }

    /// Save `text` over the todo being edited and return to idle
    pub fn save_edit(&mut self, text: impl Into<String>) {
        self.dispatch(TodoAction::SaveEdit { text: text.into() });
    }

    /// Remove every todo
    pub fn clear_all(&mut self) {
        self.dispatch(TodoAction::ClearAll);
    }

    /// Replace the input box contents
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.dispatch(TodoAction::DraftChanged { text: text.into() });
    }

    /// Press the primary button: add the draft, or save it over the edited todo
    pub fn submit(&mut self) {
        self.dispatch(TodoAction::Submit);
    }

    /// Switch between light and dark theme
    pub fn toggle_theme(&mut self) {
        self.dispatch(TodoAction::ToggleTheme);
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TodoState {
        self.store.current_state()
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.state().items
    }

    /// Item currently being edited
    #[must_use]
    pub const fn editing_id(&self) -> Option<TodoId> {
        self.state().editing_id
    }

    /// Current input mode
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.state().mode()
    }

    /// Input box contents
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.state().draft
    }

    /// Active theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.state().theme
    }

    /// Render model for the current state
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::from(self.state())
    }

    /// Call `listener` with the new state after every interaction
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Stop calling a listener registered with [`subscribe`](Self::subscribe)
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// End the session, returning its final state
    #[must_use]
    pub fn into_state(self) -> TodoState {
        self.store.into_state()
    }
}
