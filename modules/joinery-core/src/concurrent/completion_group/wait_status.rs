/// Outcome of waiting on a completion group with a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitStatus {
  /// Every pending unit left before the deadline.
  Completed,
  /// The deadline elapsed while units were still pending.
  TimedOut,
}

impl WaitStatus {
  /// Returns `true` when the wait ended because the group settled.
  #[must_use]
  pub const fn is_completed(self) -> bool {
    matches!(self, Self::Completed)
  }

  /// Returns `true` when the wait ended because the deadline elapsed.
  #[must_use]
  pub const fn is_timed_out(self) -> bool {
    matches!(self, Self::TimedOut)
  }
}
