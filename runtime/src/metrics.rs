//! Metric names and descriptions emitted by the Store.
//!
//! The store records through the `metrics` facade only. Nothing is exported
//! unless the host installs a recorder, in which case calling
//! [`register_metrics`] first attaches units and help text.

use metrics::{describe_counter, describe_histogram, Unit};

/// Actions dispatched through `Store::send`, feedback actions included
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Wall time spent inside the reducer per action
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Effects interpreted by the store, labelled by `type`
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// Dispatches aborted because feedback exceeded the configured limit
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Subscriber notifications delivered
pub const NOTIFICATIONS_TOTAL: &str = "store.subscribers.notified";

/// Register descriptions for every store metric with the installed recorder.
pub fn register_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Actions processed by the reducer");
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Time spent in the reducer per action"
    );
    describe_counter!(EFFECTS_EXECUTED, "Effects interpreted by the store");
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        "Dispatches aborted by the feedback limit"
    );
    describe_counter!(NOTIFICATIONS_TOTAL, "Subscriber notifications delivered");
}
