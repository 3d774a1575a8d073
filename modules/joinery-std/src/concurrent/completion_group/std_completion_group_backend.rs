//! Std completion group backend implementation.

use std::{
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use async_trait::async_trait;
use joinery_core_rs::{CompletionGroupBackend, CompletionGroupConfig, CompletionState, WaitStatus};
use tokio::sync::Notify;

struct Inner {
  config: CompletionGroupConfig,
  state:  Mutex<CompletionState>,
  idle:   Condvar,
  notify: Notify,
}

/// Backend implementation of CompletionGroup for std threads and the Tokio runtime
///
/// The counter and the queued notifications sit behind one `std::sync::Mutex`. Blocking waiters
/// park on a `Condvar`, async waiters on a Tokio `Notify`; both are woken on every zero crossing.
#[derive(Clone)]
pub struct StdCompletionGroupBackend {
  inner: Arc<Inner>,
}

impl StdCompletionGroupBackend {
  fn lock_state(&self) -> MutexGuard<'_, CompletionState> {
    self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl core::fmt::Debug for StdCompletionGroupBackend {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let state = self.lock_state();
    f.debug_struct("StdCompletionGroupBackend")
      .field("config", &self.inner.config)
      .field("pending", &state.pending())
      .field("rounds_completed", &state.rounds_completed())
      .finish()
  }
}

#[async_trait]
impl CompletionGroupBackend for StdCompletionGroupBackend {
  fn new(config: CompletionGroupConfig) -> Self {
    Self {
      inner: Arc::new(Inner {
        config,
        state: Mutex::new(CompletionState::new()),
        idle: Condvar::new(),
        notify: Notify::new(),
      }),
    }
  }

  fn config(&self) -> CompletionGroupConfig {
    self.inner.config
  }

  fn with_state<R, F>(&self, f: F) -> R
  where
    F: FnOnce(&mut CompletionState) -> R, {
    let mut state = self.lock_state();
    f(&mut state)
  }

  fn wake_waiters(&self) {
    self.inner.idle.notify_all();
    self.inner.notify.notify_waiters();
  }

  fn wait_timeout(&self, timeout: Duration) -> WaitStatus {
    let state = self.lock_state();
    let observed = state.rounds_completed();
    let (state, _) = self
      .inner
      .idle
      .wait_timeout_while(state, timeout, |state| !state.has_settled_since(observed))
      .unwrap_or_else(PoisonError::into_inner);
    if state.has_settled_since(observed) {
      WaitStatus::Completed
    } else {
      WaitStatus::TimedOut
    }
  }

  async fn wait(&self, observed_round: u64) {
    loop {
      let notified = self.inner.notify.notified();
      tokio::pin!(notified);
      // Register before checking so a zero crossing between the check and the await is not lost.
      notified.as_mut().enable();
      let settled = self.lock_state().has_settled_since(observed_round);
      if settled {
        return;
      }
      notified.await;
    }
  }
}
