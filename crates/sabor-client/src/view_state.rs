//! Observable per-screen state for API calls.
//!
//! A [`StateHolder`] publishes the [`ViewState`] of one piece of data over a
//! `watch` channel. A [`ViewScope`] owns the calls launched for one screen or
//! command; dropping it aborts whatever is still in flight and the aborted
//! calls never publish.
//!
//! Two launches on the same holder are not de-duplicated: both run and the
//! one that finishes last wins.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::error::OperationResult;

/// What a screen shows for one piece of remote data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// User-facing failure message.
    Failed(String),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn from_result(result: OperationResult<T>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(failure) => Self::Failed(failure.message().to_string()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the state is final for the current launch.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Publisher of one [`ViewState`]. Clones share the same channel.
#[derive(Debug)]
pub struct StateHolder<T> {
    sender: Arc<watch::Sender<ViewState<T>>>,
}

impl<T> Clone for StateHolder<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> Default for StateHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateHolder<T> {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ViewState::Idle);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Receiver that sees the current state and every later change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.sender.subscribe()
    }

    /// Publish `state`, whether or not anyone is subscribed.
    pub fn set(&self, state: ViewState<T>) {
        self.sender.send_replace(state);
    }

    pub fn reset(&self) {
        self.set(ViewState::Idle);
    }
}

impl<T: Clone> StateHolder<T> {
    #[must_use]
    pub fn current(&self) -> ViewState<T> {
        self.sender.borrow().clone()
    }
}

/// Owner of the in-flight calls of one screen or command.
#[derive(Debug, Default)]
pub struct ViewScope {
    tasks: JoinSet<()>,
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `holder` as loading, run `call` and publish its outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<T, F>(&mut self, holder: &StateHolder<T>, call: F)
    where
        T: Send + Sync + 'static,
        F: Future<Output = OperationResult<T>> + Send + 'static,
    {
        holder.set(ViewState::Loading);
        let holder = holder.clone();
        self.tasks.spawn(async move {
            let result = call.await;
            if let Err(failure) = &result {
                tracing::debug!(kind = %failure.kind(), "view call failed");
            }
            holder.set(ViewState::from_result(result));
        });
    }

    /// Wait for every launched call to finish.
    pub async fn join_all(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(error) = joined {
                if error.is_panic() {
                    tracing::error!(%error, "view call panicked");
                }
            }
        }
    }

    /// Abort every in-flight call. Their holders keep their last state.
    pub fn cancel_all(&mut self) {
        self.tasks.abort_all();
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }
}
