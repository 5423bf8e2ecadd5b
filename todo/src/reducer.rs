//! Reducer logic for the to-do page.
//!
//! Every operation is total: input that cannot apply (blank text, unknown
//! id, save outside edit mode) leaves the state untouched and is only
//! logged.

use crate::config::{EditCursorPolicy, EditTextPolicy, TodoConfig};
use crate::types::{EditMode, TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use todoai_core::{
    effect::Effect,
    environment::{Clock, IdGenerator, MonotonicIdGenerator, SystemClock},
    reducer::Reducer,
    smallvec, SmallVec,
};

/// Environment dependencies for the to-do reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for item creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and a fresh monotonic id counter
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(MonotonicIdGenerator::new()))
    }
}

/// Reducer for the to-do page
#[derive(Clone, Debug, Default)]
pub struct TodoReducer {
    config: TodoConfig,
}

impl TodoReducer {
    /// Creates a reducer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reducer with the given configuration
    #[must_use]
    pub const fn with_config(config: TodoConfig) -> Self {
        Self { config }
    }

    /// The configuration this reducer applies
    #[must_use]
    pub const fn config(&self) -> &TodoConfig {
        &self.config
    }

    fn add(state: &mut TodoState, text: String, env: &TodoEnvironment) {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank todo");
            return;
        }

        let id = TodoId::new(env.ids.next_id());
        tracing::debug!(%id, "Adding todo");
        state.items.push(TodoItem::new(id, text, env.clock.now()));
        state.draft.clear();
    }

    fn delete(&self, state: &mut TodoState, id: TodoId) {
        let Some(position) = state.items.iter().position(|t| t.id == id) else {
            tracing::debug!(%id, "Delete of unknown todo ignored");
            return;
        };

        state.items.remove(position);
        if state.editing_id == Some(id) {
            self.release_cursor(state);
        }
    }

    fn toggle_complete(state: &mut TodoState, id: TodoId) {
        match state.get_mut(id) {
            Some(item) => item.toggle(),
            None => tracing::debug!(%id, "Toggle of unknown todo ignored"),
        }
    }

    fn start_edit(state: &mut TodoState, id: TodoId) {
        let Some(item) = state.get(id) else {
            tracing::debug!(%id, "Edit of unknown todo ignored");
            return;
        };

        let text = item.text.clone();
        state.draft = text;
        state.editing_id = Some(id);
    }

    fn save_edit(&self, state: &mut TodoState, text: String) {
        let Some(id) = state.editing_id else {
            tracing::debug!("Save outside edit mode ignored");
            return;
        };

        if self.config.edit_text == EditTextPolicy::RejectBlank && text.trim().is_empty() {
            tracing::debug!(%id, "Blank edit rejected");
            return;
        }

        match state.get_mut(id) {
            Some(item) => item.text = text,
            // Only reachable when the cursor outlives its item
            None => tracing::debug!(%id, "Edited todo no longer exists"),
        }
        state.editing_id = None;
        state.draft.clear();
    }

    fn clear_all(&self, state: &mut TodoState) {
        tracing::debug!(count = state.items.len(), "Clearing all todos");
        state.items.clear();
        if state.editing_id.is_some() {
            self.release_cursor(state);
        }
    }

    fn release_cursor(&self, state: &mut TodoState) {
        match self.config.edit_cursor {
            EditCursorPolicy::ClearOnRemoval => state.editing_id = None,
            EditCursorPolicy::Retain => {
                tracing::debug!(id = ?state.editing_id, "Keeping cursor on removed todo");
            },
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { text } => Self::add(state, text, env),
            TodoAction::DeleteTodo { id } => self.delete(state, id),
            TodoAction::ToggleComplete { id } => Self::toggle_complete(state, id),
            TodoAction::StartEdit { id } => Self::start_edit(state, id),
            TodoAction::SaveEdit { text } => self.save_edit(state, text),
            TodoAction::ClearAll => self.clear_all(state),
            TodoAction::DraftChanged { text } => state.draft = text,
            TodoAction::ToggleTheme => state.theme = state.theme.toggled(),
            TodoAction::Submit => {
                let text = state.draft.clone();
                let routed = match state.mode() {
                    EditMode::Idle => TodoAction::AddTodo { text },
                    EditMode::Editing(_) => TodoAction::SaveEdit { text },
                };
                return smallvec![Effect::send(routed)];
            },
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use todoai_testing::{assertions, test_clock, ReducerTest, SequentialIdGenerator};

    fn create_test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
    }

    fn state_with(texts: &[&str]) -> TodoState {
        let mut state = TodoState::new();
        for (n, text) in (1_u64..).zip(texts) {
            state
                .items
                .push(TodoItem::new(TodoId::new(n), (*text).to_string(), Utc::now()));
        }
        state
    }

    fn texts(state: &TodoState) -> Vec<&str> {
        state.items.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_todo_success() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState {
                draft: "Buy milk".to_string(),
                ..TodoState::new()
            })
            .when_action(TodoAction::AddTodo {
                text: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let todo = &state.items[0];
                assert_eq!(todo.id, TodoId::new(1));
                assert_eq!(todo.text, "Buy milk");
                assert!(!todo.completed);
                assert_eq!(todo.created_at, test_clock().now());
                assert!(state.draft.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_keeps_surrounding_whitespace() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo {
                text: "  padded ".to_string(),
            })
            .then_state(|state| assert_eq!(texts(state), vec!["  padded "]))
            .run();
    }

    #[test]
    fn test_add_blank_is_ignored() {
        for blank in ["", "   ", "\t\n"] {
            ReducerTest::new(TodoReducer::new())
                .with_env(create_test_env())
                .given_state(TodoState {
                    draft: blank.to_string(),
                    ..TodoState::new()
                })
                .when_action(TodoAction::AddTodo {
                    text: blank.to_string(),
                })
                .then_state(move |state| {
                    assert_eq!(state.count(), 0);
                    // Input box is left alone
                    assert_eq!(state.draft, blank);
                })
                .then_effects(assertions::assert_no_effects)
                .run();
        }
    }

    #[test]
    fn test_ids_are_unique_for_same_tick() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .given_actions([
                TodoAction::AddTodo { text: "A".into() },
                TodoAction::AddTodo { text: "B".into() },
            ])
            .when_action(TodoAction::AddTodo { text: "C".into() })
            .then_state(|state| {
                let ids: Vec<u64> = state.items.iter().map(|t| t.id.get()).collect();
                assert_eq!(ids, vec![1, 2, 3]);
                assert!(state.items.iter().all(|t| t.created_at == test_clock().now()));
            })
            .run();
    }

    #[test]
    fn test_delete_preserves_order() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B", "C"]))
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(2) })
            .then_state(|state| assert_eq!(texts(state), vec!["A", "C"]))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delete_unknown_is_ignored() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(9) })
            .then_state(|state| assert_eq!(texts(state), vec!["A"]))
            .run();
    }

    #[test]
    fn test_toggle_complete() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .when_action(TodoAction::ToggleComplete { id: TodoId::new(1) })
            .then_state(|state| {
                assert!(state.items[0].completed);
                assert!(!state.items[1].completed);
            })
            .run();
    }

    #[test]
    fn test_toggle_unknown_is_ignored() {
        let before = state_with(&["A"]);
        let expected = before.clone();
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(before)
            .when_action(TodoAction::ToggleComplete { id: TodoId::new(5) })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn test_start_edit_seeds_draft() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .when_action(TodoAction::StartEdit { id: TodoId::new(2) })
            .then_state(|state| {
                assert_eq!(state.mode(), EditMode::Editing(TodoId::new(2)));
                assert_eq!(state.draft, "B");
            })
            .run();
    }

    #[test]
    fn test_start_edit_unknown_stays_idle() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .when_action(TodoAction::StartEdit { id: TodoId::new(7) })
            .then_state(|state| {
                assert_eq!(state.mode(), EditMode::Idle);
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_start_edit_retargets() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::StartEdit { id: TodoId::new(2) })
            .then_state(|state| {
                assert_eq!(state.editing_id, Some(TodoId::new(2)));
                assert_eq!(state.draft, "B");
            })
            .run();
    }

    #[test]
    fn test_save_edit_changes_only_text() {
        let mut given = state_with(&["A", "B"]);
        given.items[0].completed = true;

        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::SaveEdit {
                text: "New text".to_string(),
            })
            .then_state(|state| {
                assert_eq!(texts(state), vec!["New text", "B"]);
                assert!(state.items[0].completed);
                assert_eq!(state.items[0].id, TodoId::new(1));
                assert_eq!(state.mode(), EditMode::Idle);
                assert!(state.draft.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_save_edit_outside_edit_mode_is_ignored() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState {
                draft: "typed".to_string(),
                ..state_with(&["A"])
            })
            .when_action(TodoAction::SaveEdit {
                text: "X".to_string(),
            })
            .then_state(|state| {
                assert_eq!(texts(state), vec!["A"]);
                assert_eq!(state.draft, "typed");
            })
            .run();
    }

    #[test]
    fn test_save_edit_accepts_empty_text_by_default() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::SaveEdit { text: String::new() })
            .then_state(|state| {
                assert_eq!(texts(state), vec![""]);
                assert_eq!(state.mode(), EditMode::Idle);
            })
            .run();
    }

    #[test]
    fn test_save_edit_rejects_blank_when_configured() {
        let config = TodoConfig::default().with_edit_text(EditTextPolicy::RejectBlank);

        ReducerTest::new(TodoReducer::with_config(config))
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::SaveEdit {
                text: "  ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(texts(state), vec!["A"]);
                assert_eq!(state.mode(), EditMode::Editing(TodoId::new(1)));
            })
            .run();
    }

    #[test]
    fn test_delete_edited_item_returns_to_idle() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(1) })
            .then_state(|state| {
                assert_eq!(texts(state), vec!["B"]);
                assert_eq!(state.mode(), EditMode::Idle);
            })
            .run();
    }

    #[test]
    fn test_delete_other_item_keeps_editing() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::DeleteTodo { id: TodoId::new(2) })
            .then_state(|state| assert_eq!(state.mode(), EditMode::Editing(TodoId::new(1))))
            .run();
    }

    #[test]
    fn test_retained_cursor_save_touches_nothing() {
        let config = TodoConfig::default().with_edit_cursor(EditCursorPolicy::Retain);

        ReducerTest::new(TodoReducer::with_config(config))
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B"]))
            .given_actions([
                TodoAction::StartEdit { id: TodoId::new(1) },
                TodoAction::DeleteTodo { id: TodoId::new(1) },
            ])
            .when_action(TodoAction::SaveEdit {
                text: "ghost".to_string(),
            })
            .then_state(|state| {
                assert_eq!(texts(state), vec!["B"]);
                assert_eq!(state.mode(), EditMode::Idle);
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_clear_all() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A", "B", "C"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(3) }])
            .when_action(TodoAction::ClearAll)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.mode(), EditMode::Idle);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_clear_all_retains_cursor_when_configured() {
        let config = TodoConfig::default().with_edit_cursor(EditCursorPolicy::Retain);

        ReducerTest::new(TodoReducer::with_config(config))
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .given_actions([TodoAction::StartEdit { id: TodoId::new(1) }])
            .when_action(TodoAction::ClearAll)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.editing_id, Some(TodoId::new(1)));
            })
            .run();
    }

    #[test]
    fn test_submit_while_idle_routes_to_add() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .given_actions([TodoAction::DraftChanged {
                text: "Walk dog".to_string(),
            }])
            .when_action(TodoAction::Submit)
            .then_state(|state| assert_eq!(state.count(), 0))
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[TodoAction::AddTodo {
                        text: "Walk dog".to_string(),
                    }],
                );
            })
            .run();
    }

    #[test]
    fn test_submitted_setup_adds_before_action_under_test() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .given_actions([
                TodoAction::DraftChanged {
                    text: "Walk dog".to_string(),
                },
                TodoAction::Submit,
            ])
            .when_action(TodoAction::ToggleTheme)
            .then_state(|state| {
                assert_eq!(texts(state), vec!["Walk dog"]);
                assert!(state.draft.is_empty());
            })
            .run();
    }

    #[test]
    fn test_submit_while_editing_routes_to_save() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(state_with(&["A"]))
            .given_actions([
                TodoAction::StartEdit { id: TodoId::new(1) },
                TodoAction::DraftChanged {
                    text: "A, edited".to_string(),
                },
            ])
            .when_action(TodoAction::Submit)
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &[TodoAction::SaveEdit {
                        text: "A, edited".to_string(),
                    }],
                );
            })
            .run();
    }

    #[test]
    fn test_toggle_theme() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::ToggleTheme)
            .then_state(|state| assert!(!state.theme.is_dark()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
