use std::{future::Future, time::Duration};

use joinery_core_rs::{CompletionGroup, CompletionGroupBackend, WaitStatus};

/// Deadline-bounded async waiting for completion groups on the Tokio runtime.
pub trait CompletionGroupTimeoutExt {
  /// Suspends the calling task until the group settles or `timeout` elapses.
  ///
  /// Like `CompletionGroup::wait`, the current round is recorded when this method is called.
  /// Timing out leaves the pending count and the outstanding work untouched.
  fn wait_async_timeout(&self, timeout: Duration) -> impl Future<Output = WaitStatus> + Send + '_;
}

impl<B> CompletionGroupTimeoutExt for CompletionGroup<B>
where
  B: CompletionGroupBackend,
{
  fn wait_async_timeout(&self, timeout: Duration) -> impl Future<Output = WaitStatus> + Send + '_ {
    let waiting = self.wait();
    async move {
      match tokio::time::timeout(timeout, waiting).await {
        | Ok(()) => WaitStatus::Completed,
        | Err(_) => {
          tracing::debug!(
            group = self.label(),
            ?timeout,
            pending = self.pending(),
            "completion group async wait timed out"
          );
          WaitStatus::TimedOut
        },
      }
    }
  }
}
