/// Errors reported by a completion group when its enter/leave accounting is violated.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum CompletionGroupError {
  /// `leave` was called while no unit of work was pending.
  #[error("leave called without a matching enter (rounds completed: {rounds_completed})")]
  Underflow {
    /// Number of zero crossings the group had completed when the mismatch was detected.
    rounds_completed: u64,
  },
  /// Registering more units would overflow the pending counter.
  #[error("entering {requested} units would overflow the pending counter ({pending} pending)")]
  Overflow {
    /// Units pending at the time of the request.
    pending:   usize,
    /// Units the caller tried to register.
    requested: usize,
  },
}
