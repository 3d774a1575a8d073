use alloc::boxed::Box;

/// Zero-argument action run when a completion group settles.
pub type NotificationAction = Box<dyn FnOnce() + Send + 'static>;

/// Execution context on which completion notifications are delivered.
///
/// The completion group never decides where a notification runs; the caller registering it
/// supplies the executor (inline, a runtime task, a dedicated thread, a UI dispatcher, ...).
pub trait NotificationExecutor: Send + 'static {
  /// Runs or schedules `action`. Implementations must run it at most once.
  fn execute(&self, action: NotificationAction);
}

impl<E> NotificationExecutor for Box<E>
where
  E: NotificationExecutor + ?Sized,
{
  fn execute(&self, action: NotificationAction) {
    (**self).execute(action);
  }
}
