use alloc::boxed::Box;
use core::time::Duration;

use async_trait::async_trait;

use super::{completion_group_config::CompletionGroupConfig, completion_state::CompletionState, wait_status::WaitStatus};

/// Trait defining the backend implementation for CompletionGroup.
///
/// A backend owns the single lock guarding [`CompletionState`] and the wake-up machinery for
/// blocked and suspended waiters. Clones share the same state.
#[async_trait]
pub trait CompletionGroupBackend: Clone + Send + Sync {
  /// Creates an idle backend.
  fn new(config: CompletionGroupConfig) -> Self;

  /// Returns the configuration the backend was created with.
  fn config(&self) -> CompletionGroupConfig;

  /// Runs `f` while holding the state lock.
  fn with_state<R, F>(&self, f: F) -> R
  where
    F: FnOnce(&mut CompletionState) -> R;

  /// Wakes every blocked and suspended waiter after a zero crossing.
  fn wake_waiters(&self);

  /// Blocks the calling thread until the group settles or `timeout` elapses.
  fn wait_timeout(&self, timeout: Duration) -> WaitStatus;

  /// Suspends the calling task until the group is idle or has closed a round after
  /// `observed_round`.
  async fn wait(&self, observed_round: u64);
}
