#[cfg(test)]
mod tests;

/// Reaction of a completion group to `leave` being called with nothing pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderflowPolicy {
  /// Halt the caller with a panic.
  Panic,
  /// Return [`CompletionGroupError::Underflow`](super::CompletionGroupError::Underflow) to the
  /// caller.
  ReturnError,
}

impl UnderflowPolicy {
  /// Returns `true` when an underflow should panic.
  #[must_use]
  pub const fn panics(self) -> bool {
    matches!(self, Self::Panic)
  }
}

impl Default for UnderflowPolicy {
  /// Debug builds panic, release builds return the error.
  fn default() -> Self {
    if cfg!(debug_assertions) {
      Self::Panic
    } else {
      Self::ReturnError
    }
  }
}

/// Configuration applied when constructing a completion group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionGroupConfig {
  underflow_policy: UnderflowPolicy,
  label:            Option<&'static str>,
}

impl CompletionGroupConfig {
  /// Creates a configuration with explicit values.
  #[must_use]
  pub const fn new(underflow_policy: UnderflowPolicy, label: Option<&'static str>) -> Self {
    Self { underflow_policy, label }
  }

  /// Sets the underflow policy.
  #[must_use]
  pub const fn with_underflow_policy(mut self, policy: UnderflowPolicy) -> Self {
    self.underflow_policy = policy;
    self
  }

  /// Sets the label attached to tracing events emitted by the group.
  #[must_use]
  pub const fn with_label(mut self, label: &'static str) -> Self {
    self.label = Some(label);
    self
  }

  /// Mutable setter for the underflow policy.
  pub const fn set_underflow_policy(&mut self, policy: UnderflowPolicy) {
    self.underflow_policy = policy;
  }

  /// Mutable setter for the label.
  pub const fn set_label(&mut self, label: Option<&'static str>) {
    self.label = label;
  }

  /// Returns the underflow policy.
  #[must_use]
  pub const fn underflow_policy(&self) -> UnderflowPolicy {
    self.underflow_policy
  }

  /// Returns the configured label, if any.
  #[must_use]
  pub const fn label(&self) -> Option<&'static str> {
    self.label
  }

  pub(crate) fn label_or_default(&self) -> &'static str {
    self.label.unwrap_or("completion_group")
  }
}
