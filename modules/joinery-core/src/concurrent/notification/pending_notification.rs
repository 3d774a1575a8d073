
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use super::notification_executor::{NotificationAction, NotificationExecutor};

/// A registered notification: the action together with the executor it must run on.
pub struct PendingNotification {
  action:   NotificationAction,
  executor: Box<dyn NotificationExecutor>,
}

impl PendingNotification {
  /// Pairs `action` with the executor that will run it.
  #[must_use]
  pub fn new<E, F>(executor: E, action: F) -> Self
  where
    E: NotificationExecutor,
    F: FnOnce() + Send + 'static, {
    Self { action: Box::new(action), executor: Box::new(executor) }
  }

  /// Hands the action over to its executor, consuming the notification.
  pub fn dispatch(self) {
    let Self { action, executor } = self;
    executor.execute(action);
  }

  /// Dispatches `notifications` in order.
  ///
  /// If an action running on the calling thread panics, the remaining notifications are still
  /// dispatched while the panic unwinds. A second panic during that unwinding aborts the process.
  pub(crate) fn dispatch_all(notifications: Vec<Self>) {
    let mut remaining = DispatchRemaining(notifications.into_iter());
    while let Some(notification) = remaining.0.next() {
      notification.dispatch();
    }
  }
}

struct DispatchRemaining(vec::IntoIter<PendingNotification>);

impl Drop for DispatchRemaining {
  fn drop(&mut self) {
    self.0.by_ref().for_each(PendingNotification::dispatch);
  }
}

impl fmt::Debug for PendingNotification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PendingNotification").finish_non_exhaustive()
  }
}
