use super::notification_executor::{NotificationAction, NotificationExecutor};

/// Executor that runs the notification on the calling thread.
///
/// For a group with pending units this is the thread performing the final `leave`; for an idle
/// group it is the thread registering the notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineExecutor;

impl NotificationExecutor for InlineExecutor {
  fn execute(&self, action: NotificationAction) {
    action();
  }
}
