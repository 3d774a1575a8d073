use std::sync::{Arc, Mutex, PoisonError};

use joinery_core_rs::{NotificationAction, NotificationExecutor};

/// Executor that runs each notification on a freshly spawned OS thread.
///
/// If the thread cannot be spawned the notification runs on the calling thread instead, so it is
/// never lost.
#[derive(Clone, Debug, Default)]
pub struct ThreadExecutor {
  name: Option<String>,
}

impl ThreadExecutor {
  /// Creates an executor spawning unnamed threads.
  #[must_use]
  pub const fn new() -> Self {
    Self { name: None }
  }

  /// Sets the name given to spawned notification threads.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Returns the configured thread name.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }
}

impl NotificationExecutor for ThreadExecutor {
  fn execute(&self, action: NotificationAction) {
    let slot = Arc::new(Mutex::new(Some(action)));
    let worker_slot = Arc::clone(&slot);
    let mut builder = std::thread::Builder::new();
    if let Some(name) = &self.name {
      builder = builder.name(name.clone());
    }
    let spawned = builder.spawn(move || {
      let action = worker_slot.lock().unwrap_or_else(PoisonError::into_inner).take();
      if let Some(action) = action {
        action();
      }
    });
    if let Err(err) = spawned {
      tracing::warn!(error = %err, "failed to spawn notification thread, running inline");
      let action = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
      if let Some(action) = action {
        action();
      }
    }
  }
}
