//! Notification execution contexts.

mod inline_executor;
mod notification_executor;
mod pending_notification;

pub use inline_executor::InlineExecutor;
pub use notification_executor::{NotificationAction, NotificationExecutor};
pub use pending_notification::PendingNotification;
