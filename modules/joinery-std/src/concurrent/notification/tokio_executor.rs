use joinery_core_rs::{NotificationAction, NotificationExecutor};
use tokio::runtime::{Handle, TryCurrentError};

/// Executor that delivers notifications as tasks on a Tokio runtime.
///
/// If the runtime drops the task before running it, for instance because it has already shut
/// down, the notification runs on the thread dropping the task instead, so it is never lost.
#[derive(Clone, Debug)]
pub struct TokioExecutor {
  handle: Handle,
}

impl TokioExecutor {
  /// Creates an executor bound to the given runtime handle.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Creates an executor bound to the runtime the caller is running on.
  ///
  /// # Errors
  /// Returns [`TryCurrentError`] when called outside a Tokio runtime.
  pub fn current() -> Result<Self, TryCurrentError> {
    Handle::try_current().map(Self::new)
  }

  /// Returns the runtime handle notifications are spawned on.
  #[must_use]
  pub const fn handle(&self) -> &Handle {
    &self.handle
  }
}

impl NotificationExecutor for TokioExecutor {
  fn execute(&self, action: NotificationAction) {
    let undelivered = UndeliveredAction(Some(action));
    drop(self.handle.spawn(async move { undelivered.run() }));
  }
}

struct UndeliveredAction(Option<NotificationAction>);

impl UndeliveredAction {
  fn run(mut self) {
    if let Some(action) = self.0.take() {
      action();
    }
  }
}

impl Drop for UndeliveredAction {
  fn drop(&mut self) {
    if let Some(action) = self.0.take() {
      tracing::warn!("tokio runtime dropped notification task, running inline");
      action();
    }
  }
}
