#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use super::completion_group_error::CompletionGroupError;
use crate::concurrent::notification::PendingNotification;

/// Result of a successful `leave` against [`CompletionState`].
#[derive(Debug)]
pub enum LeaveOutcome {
  /// Units are still outstanding.
  Pending {
    /// Units still pending after this leave.
    remaining: usize,
  },
  /// This leave brought the counter to zero and closed a round.
  Settled {
    /// Index of the round that just completed, starting at 1.
    round:         u64,
    /// Notifications registered during the round, in registration order.
    notifications: Vec<PendingNotification>,
  },
}

/// Shared mutable state of a completion group.
///
/// Backends keep exactly one instance behind their lock. Every method is a single linearizable
/// step as long as callers hold that lock while invoking it; dispatching the returned
/// notifications must happen after the lock is released.
#[derive(Debug, Default)]
pub struct CompletionState {
  pending:          usize,
  rounds_completed: u64,
  notifications:    Vec<PendingNotification>,
}

impl CompletionState {
  /// Creates an idle state.
  #[must_use]
  pub const fn new() -> Self {
    Self { pending: 0, rounds_completed: 0, notifications: Vec::new() }
  }

  /// Registers `units` additional pending units and returns the new pending count.
  ///
  /// # Errors
  /// Returns [`CompletionGroupError::Overflow`] and leaves the counter untouched when the sum does
  /// not fit in `usize`.
  pub fn enter(&mut self, units: usize) -> Result<usize, CompletionGroupError> {
    self.pending = self
      .pending
      .checked_add(units)
      .ok_or(CompletionGroupError::Overflow { pending: self.pending, requested: units })?;
    Ok(self.pending)
  }

  /// Marks one unit as finished.
  ///
  /// # Errors
  /// Returns [`CompletionGroupError::Underflow`] and leaves the counter untouched when nothing is
  /// pending.
  pub fn leave(&mut self) -> Result<LeaveOutcome, CompletionGroupError> {
    let remaining = self
      .pending
      .checked_sub(1)
      .ok_or(CompletionGroupError::Underflow { rounds_completed: self.rounds_completed })?;
    self.pending = remaining;
    if remaining > 0 {
      return Ok(LeaveOutcome::Pending { remaining });
    }
    self.rounds_completed += 1;
    Ok(LeaveOutcome::Settled { round: self.rounds_completed, notifications: core::mem::take(&mut self.notifications) })
  }

  /// Queues `notification` for the next zero crossing.
  ///
  /// When nothing is pending the notification is handed back so the caller can dispatch it
  /// right away.
  #[must_use]
  pub fn register(&mut self, notification: PendingNotification) -> Option<PendingNotification> {
    if self.pending == 0 {
      return Some(notification);
    }
    self.notifications.push(notification);
    None
  }

  /// Returns `true` once the group is idle or has closed a round after `observed_round`.
  ///
  /// Waiters record [`rounds_completed`](Self::rounds_completed) before sleeping so that a
  /// zero crossing quickly followed by a fresh `enter` still releases them.
  #[must_use]
  pub const fn has_settled_since(&self, observed_round: u64) -> bool {
    self.pending == 0 || self.rounds_completed != observed_round
  }

  /// Returns the number of outstanding units.
  #[must_use]
  pub const fn pending(&self) -> usize {
    self.pending
  }

  /// Returns the number of completed rounds.
  #[must_use]
  pub const fn rounds_completed(&self) -> u64 {
    self.rounds_completed
  }

  /// Returns the number of notifications waiting for the current round to close.
  #[must_use]
  pub fn queued_notifications(&self) -> usize {
    self.notifications.len()
  }
}
