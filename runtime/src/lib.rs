//! # TodoAI Runtime
//!
//! Runtime implementation for the TodoAI reducer architecture.
//!
//! This crate provides the Store that owns page state, runs the reducer and
//! interprets the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment for one page session
//! - **Effect Executor**: Feeds `Effect::Send` actions back into the reducer
//! - **Subscribers**: Listeners (the rendering layer) told about every state change
//!
//! The event loop is single-threaded: [`Store::send`] takes `&mut self` and
//! runs an action, plus every action its effects feed back, to completion
//! before returning.
//!
//! ## Example
//!
//! ```ignore
//! use todoai_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use todoai_core::{effect::Effect, reducer::Reducer};

/// Metric names recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept feeding actions back past the configured limit
        ///
        /// State changes made before the limit was hit are kept. The
        /// actions still queued are dropped.
        #[error("Feedback limit of {limit} actions exceeded ({dropped} queued actions dropped)")]
        FeedbackLimitExceeded {
            /// Configured maximum number of feedback actions per dispatch
            limit: usize,
            /// Actions discarded when the dispatch was aborted
            dropped: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todoai_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions effects may feed back during a single `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Handle identifying a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Store module - The runtime coordinator
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError, SubscriptionId, metrics};
    use std::collections::VecDeque;
    use std::marker::PhantomData;

    type Listener<S> = Box<dyn FnMut(&S)>;

    struct Subscription<S> {
        id: SubscriptionId,
        listener: Listener<S>,
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned, mutated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (feedback loop)
    /// 5. Subscribers (notified once per dispatch)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        subscribers: Vec<Subscription<S>>,
        next_subscription: u64,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                subscribers: Vec::new(),
                next_subscription: 0,
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then interprets its effects. Actions fed back
        /// through `Effect::Send` are reduced in FIFO order before this call
        /// returns. Subscribers are notified once, after the queue drains.
        ///
        /// Returns the number of actions reduced, the initial one included.
        ///
        /// # Errors
        ///
        /// [`StoreError::FeedbackLimitExceeded`] if effects feed back more
        /// than `max_feedback_actions` actions. Subscribers are still
        /// notified of the state reached so far.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<usize, StoreError> {
            tracing::debug!("Processing action");

            let mut queue = VecDeque::from([action]);
            let mut reduced = 0_usize;

            while let Some(action) = queue.pop_front() {
                // `reduced` doubles as the feedback index of this action
                if reduced > self.config.max_feedback_actions {
                    let dropped = queue.len() + 1;
                    tracing::warn!(
                        limit = self.config.max_feedback_actions,
                        dropped,
                        "Feedback limit exceeded, aborting dispatch"
                    );
                    ::metrics::counter!(metrics::FEEDBACK_LIMIT_EXCEEDED).increment(1);
                    self.notify();
                    return Err(StoreError::FeedbackLimitExceeded {
                        limit: self.config.max_feedback_actions,
                        dropped,
                    });
                }

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                    ::metrics::histogram!(metrics::REDUCER_DURATION)
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };
                reduced += 1;
                ::metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

                for effect in effects {
                    Self::execute_effect(effect, &mut queue);
                }
            }

            self.notify();
            tracing::debug!(reduced, "Action processing completed");
            Ok(reduced)
        }

        fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "none").increment(1);
                },
                Effect::Send(action) => {
                    tracing::trace!("Executing Effect::Send, queueing feedback action");
                    ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "send").increment(1);
                    queue.push_back(action);
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    ::metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "sequential")
                        .increment(1);
                    for effect in effects {
                        Self::execute_effect(effect, queue);
                    }
                },
            }
        }

        fn notify(&mut self) {
            for subscription in &mut self.subscribers {
                (subscription.listener)(&self.state);
            }
            ::metrics::counter!(metrics::NOTIFICATIONS_TOTAL)
                .increment(self.subscribers.len() as u64);
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let open = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        #[must_use]
        pub const fn current_state(&self) -> &S {
            &self.state
        }

        /// Borrow the environment the reducer runs with
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }

        /// Register a listener called with the new state after every `send`
        pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
        where
            F: FnMut(&S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.subscribers.push(Subscription {
                id,
                listener: Box::new(listener),
            });
            tracing::trace!(?id, "Subscriber registered");
            id
        }

        /// Remove a listener. Returns `false` if it was not registered.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.subscribers.len();
            self.subscribers.retain(|s| s.id != id);
            before != self.subscribers.len()
        }

        /// Consume the store, returning its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }
}

pub use store::Store;
