mod completion_group_timeout_ext;
mod std_completion_group_backend;

#[cfg(test)]
mod tests;

pub use completion_group_timeout_ext::CompletionGroupTimeoutExt;
use joinery_core_rs::{CompletionGroup as CoreCompletionGroup, CompletionToken as CoreCompletionToken};
pub use std_completion_group_backend::StdCompletionGroupBackend;

/// Completion group backed by std synchronization and Tokio notifications
///
/// Units can be entered and left from plain threads as well as Tokio tasks. Waiters may block
/// with `wait_timeout` or suspend with `wait`.
pub type CompletionGroup = CoreCompletionGroup<StdCompletionGroupBackend>;

/// RAII token leaving a [`CompletionGroup`] when completed or dropped.
pub type CompletionToken = CoreCompletionToken<StdCompletionGroupBackend>;
