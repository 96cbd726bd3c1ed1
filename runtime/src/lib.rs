//! # Seatbook Runtime
//!
//! Runtime implementation for the Seatbook reducer architecture.
//!
//! This crate provides the [`Store`] that owns a session's state, runs the
//! reducer for every action and executes the effects the reducer returns.
//!
//! ## Ordering
//!
//! A session is driven one action at a time. [`Store::send`] takes the state
//! write lock for the reducer call, then executes the returned effects (and
//! any actions they feed back) before it resolves. Callers that await each
//! `send` therefore observe a strictly sequential action history.
//!
//! ## Example
//!
//! ```ignore
//! use seatbook_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field.clone()).await;
//! ```

use futures::future::BoxFuture;
use seatbook_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// The Store - runtime for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` so views can read while no action is running)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
///
/// Cloning a Store is cheap and yields a handle to the same state.
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
    state: Arc<RwLock<S>>,
    reducer: Arc<R>,
    environment: Arc<E>,
    shutdown: Arc<AtomicBool>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Access the injected environment
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Send an action to the store
    ///
    /// Runs the reducer under the state write lock, then executes every
    /// returned effect. Actions produced by effects are sent back through
    /// the reducer before this call resolves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        self.dispatch(action).await
    }

    fn dispatch(&self, action: A) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            for effect in effects {
                let feedback = self.execute_effect(effect).await;
                for action in feedback {
                    tracing::trace!("Effect produced an action, sending to store");
                    self.dispatch(action).await?;
                }
            }

            tracing::debug!("Action processing completed");
            Ok(())
        })
    }

    /// Execute one effect, collecting the actions it feeds back
    fn execute_effect(&self, effect: Effect<A>) -> BoxFuture<'_, Vec<A>> {
        Box::pin(async move {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    Vec::new()
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    fut.await.into_iter().collect()
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    let mut produced = Vec::new();
                    for effect in effects {
                        produced.extend(self.execute_effect(effect).await);
                    }
                    produced
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    futures::future::join_all(
                        effects.into_iter().map(|effect| self.execute_effect(effect)),
                    )
                    .await
                    .into_iter()
                    .flatten()
                    .collect()
                },
            }
        })
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let screen = store.state(|s| s.screen()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Stop accepting new actions
    ///
    /// Actions already being processed finish normally.
    pub fn shutdown(&self) {
        tracing::info!("Store shutting down");
        self.shutdown.store(true, Ordering::Release);
    }

    /// Whether [`Store::shutdown`] has been called
    #[must_use]
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}
