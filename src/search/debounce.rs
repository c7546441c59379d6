//! Trailing-edge debouncing on the Tokio timer.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

/// Quiet period used by the search inputs.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

type Callback<A> = Arc<dyn Fn(A) -> BoxFuture<'static, ()> + Send + Sync>;

/// Timer owned by a [`Debouncer`].
#[derive(Debug, Default)]
enum DebounceState {
    #[default]
    Idle,
    /// A call is scheduled; the handle belongs to the sleeping timer task.
    Pending(JoinHandle<()>),
}

/// Runs a callback once input has been quiet for `delay`.
///
/// Every [`Debouncer::call`] replaces the scheduled call, so only the last call
/// of a burst reaches the callback, with that call's arguments. Discarded calls
/// leave no trace. Once the timer fires the callback future is detached from
/// the timer: a later call never interrupts a callback that already started.
///
/// Must be used from within a Tokio runtime.
pub struct Debouncer<A> {
    delay: Duration,
    callback: Callback<A>,
    state: Mutex<DebounceState>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F, Fut>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let callback: Callback<A> =
            Arc::new(move |args: A| -> BoxFuture<'static, ()> { Box::pin(callback(args)) });
        Self {
            delay,
            callback,
            state: Mutex::new(DebounceState::Idle),
        }
    }

    /// Cancels any pending call and schedules `args` after the delay.
    pub fn call(&self, args: A) {
        let mut state = self.lock_state();
        Self::cancel_locked(&mut state);

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(callback(args));
        });

        *state = DebounceState::Pending(timer);
    }

    /// Drops the pending call, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.lock_state();
        Self::cancel_locked(&mut state)
    }

    /// Whether a call is scheduled and its timer has not fired yet.
    pub fn is_pending(&self) -> bool {
        matches!(&*self.lock_state(), DebounceState::Pending(timer) if !timer.is_finished())
    }

    fn cancel_locked(state: &mut DebounceState) -> bool {
        match std::mem::take(state) {
            DebounceState::Pending(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DebounceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let DebounceState::Pending(timer) = std::mem::take(state) {
            timer.abort();
        }
    }
}
