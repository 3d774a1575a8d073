//! Concurrency primitives shared across runtimes.

/// Counting join barrier and its building blocks.
pub mod completion_group;
/// Execution contexts for completion notifications.
pub mod notification;

pub use completion_group::{
  CompletionGroup, CompletionGroupBackend, CompletionGroupConfig, CompletionGroupError, CompletionState,
  CompletionToken, LeaveOutcome, UnderflowPolicy, WaitStatus,
};
pub use notification::{InlineExecutor, NotificationAction, NotificationExecutor, PendingNotification};
