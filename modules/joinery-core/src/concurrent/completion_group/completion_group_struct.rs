
use core::{future::Future, time::Duration};

use super::{
  completion_group_backend::CompletionGroupBackend,
  completion_group_config::CompletionGroupConfig,
  completion_group_error::CompletionGroupError,
  completion_state::{CompletionState, LeaveOutcome},
  completion_token::CompletionToken,
  wait_status::WaitStatus,
};
use crate::concurrent::notification::{InlineExecutor, NotificationExecutor, PendingNotification};

/// Counting join barrier for fan-out/fan-in coordination.
///
/// Each unit of work is registered with [`enter`](Self::enter) before it is dispatched and
/// signals [`leave`](Self::leave) when it finishes. Once the outstanding count drops back to zero,
/// every notification registered through [`notify`](Self::notify) fires exactly once and waiters
/// are released. The group is then idle and can be reused for another round.
///
/// Register the whole batch before dispatching any unit. Entering a unit only after a sibling
/// has already been dispatched lets the sibling finish first, which closes the round early.
#[derive(Clone, Debug)]
pub struct CompletionGroup<B>
where
  B: CompletionGroupBackend, {
  backend: B,
}

impl<B> CompletionGroup<B>
where
  B: CompletionGroupBackend,
{
  /// Creates an idle group with the default configuration.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(CompletionGroupConfig::default())
  }

  /// Creates an idle group with the given configuration.
  #[must_use]
  pub fn with_config(config: CompletionGroupConfig) -> Self {
    Self { backend: B::new(config) }
  }

  /// Registers one pending unit of work.
  ///
  /// # Panics
  /// Panics if the pending counter would overflow `usize`.
  pub fn enter(&self) {
    if let Err(err) = self.enter_many(1) {
      overflow(&err);
    }
  }

  /// Registers `units` pending units in a single step.
  ///
  /// # Errors
  /// Returns [`CompletionGroupError::Overflow`] when the counter would overflow; the counter is
  /// left unchanged.
  pub fn enter_many(&self, units: usize) -> Result<(), CompletionGroupError> {
    let pending = self.backend.with_state(|state| state.enter(units))?;
    tracing::trace!(group = self.label(), units, pending, "completion group entered");
    Ok(())
  }

  /// Enters one unit and returns a token that leaves it when completed or dropped.
  #[must_use]
  pub fn token(&self) -> CompletionToken<B> {
    self.enter();
    CompletionToken::new(self.clone())
  }

  /// Signals that one pending unit has finished.
  ///
  /// The leave that brings the counter to zero wakes all waiters and then dispatches every
  /// registered notification in registration order.
  ///
  /// # Errors
  /// Returns [`CompletionGroupError::Underflow`] when nothing is pending and the configured
  /// policy is [`UnderflowPolicy::ReturnError`](super::UnderflowPolicy::ReturnError).
  ///
  /// # Panics
  /// Panics on underflow when the configured policy is
  /// [`UnderflowPolicy::Panic`](super::UnderflowPolicy::Panic). A panic raised by an inline
  /// notification is propagated once the remaining notifications of the round have been dispatched.
  pub fn leave(&self) -> Result<(), CompletionGroupError> {
    let result = self.release();
    if let Err(err) = &result {
      if self.backend.config().underflow_policy().panics() {
        underflow(err);
      }
    }
    result
  }

  /// Leaves one unit without applying the panic policy; underflow is reported and returned.
  pub(crate) fn release(&self) -> Result<(), CompletionGroupError> {
    match self.backend.with_state(CompletionState::leave) {
      | Ok(LeaveOutcome::Pending { remaining }) => {
        tracing::trace!(group = self.label(), pending = remaining, "completion group left");
        Ok(())
      },
      | Ok(LeaveOutcome::Settled { round, notifications }) => {
        tracing::debug!(
          group = self.label(),
          round,
          notifications = notifications.len(),
          "completion group settled"
        );
        self.backend.wake_waiters();
        PendingNotification::dispatch_all(notifications);
        Ok(())
      },
      | Err(err) => {
        tracing::error!(group = self.label(), error = %err, "completion group left more times than entered");
        Err(err)
      },
    }
  }

  /// Registers `action` to run on `executor` when the outstanding count reaches zero.
  ///
  /// If nothing is pending the action is dispatched immediately. Registrations made during the
  /// same round queue up and fire in registration order at that round's zero crossing.
  pub fn notify<E, F>(&self, executor: E, action: F)
  where
    E: NotificationExecutor,
    F: FnOnce() + Send + 'static, {
    let notification = PendingNotification::new(executor, action);
    match self.backend.with_state(|state| state.register(notification)) {
      | Some(immediate) => {
        tracing::trace!(group = self.label(), "completion group idle, dispatching notification immediately");
        immediate.dispatch();
      },
      | None => tracing::trace!(group = self.label(), "completion group queued notification"),
    }
  }

  /// Registers `action` to run on the thread that closes the round.
  pub fn notify_inline<F>(&self, action: F)
  where
    F: FnOnce() + Send + 'static, {
    self.notify(InlineExecutor, action);
  }

  /// Blocks the calling thread until the group settles or `timeout` elapses.
  ///
  /// Never mutates the pending count and never cancels outstanding work.
  #[must_use]
  pub fn wait_timeout(&self, timeout: Duration) -> WaitStatus {
    let status = self.backend.wait_timeout(timeout);
    if status.is_timed_out() {
      tracing::debug!(group = self.label(), ?timeout, pending = self.pending(), "completion group wait timed out");
    }
    status
  }

  /// Asynchronously waits until the group settles.
  ///
  /// The current round is recorded when this method is called, not when the future is first
  /// polled, so a zero crossing in between releases the waiter even if a new round has started.
  pub fn wait(&self) -> impl Future<Output = ()> + Send + '_ {
    let observed_round = self.rounds_completed();
    self.backend.wait(observed_round)
  }

  /// Returns the number of outstanding units.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.backend.with_state(|state| state.pending())
  }

  /// Returns `true` when no unit is outstanding.
  #[must_use]
  pub fn is_idle(&self) -> bool {
    self.pending() == 0
  }

  /// Returns the number of zero crossings observed so far.
  #[must_use]
  pub fn rounds_completed(&self) -> u64 {
    self.backend.with_state(|state| state.rounds_completed())
  }

  /// Returns the configuration of this group.
  #[must_use]
  pub fn config(&self) -> CompletionGroupConfig {
    self.backend.config()
  }

  /// Gets a reference to the backend.
  #[must_use]
  pub const fn backend(&self) -> &B {
    &self.backend
  }

  /// Returns the label attached to the tracing events of this group.
  #[must_use]
  pub fn label(&self) -> &'static str {
    self.backend.config().label_or_default()
  }
}

impl<B> Default for CompletionGroup<B>
where
  B: CompletionGroupBackend,
{
  fn default() -> Self {
    Self::new()
  }
}

#[allow(clippy::panic)]
fn underflow(err: &CompletionGroupError) -> ! {
  panic!("CompletionGroup::leave called more times than enter: {err}");
}

#[allow(clippy::panic)]
fn overflow(err: &CompletionGroupError) -> ! {
  panic!("CompletionGroup::enter overflowed the pending counter: {err}");
}
