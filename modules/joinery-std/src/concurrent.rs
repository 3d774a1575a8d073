/// Std/Tokio-backed completion group.
pub mod completion_group;
/// Notification executors for threads and the Tokio runtime.
pub mod notification;
