use super::{
  completion_group_backend::CompletionGroupBackend, completion_group_error::CompletionGroupError,
  completion_group_struct::CompletionGroup,
};

/// RAII handle for one entered unit of work.
///
/// Obtained from [`CompletionGroup::token`]. The unit leaves the group exactly once, either via
/// [`complete`](Self::complete) or when the token is dropped, so early returns and panics in the
/// unit still close the round.
///
/// Dropping never panics: an unmatched leave on drop is logged and ignored even under
/// [`UnderflowPolicy::Panic`](super::UnderflowPolicy::Panic), so a token dropped while the thread is
/// unwinding cannot abort the process.
#[derive(Debug)]
pub struct CompletionToken<B>
where
  B: CompletionGroupBackend, {
  group: Option<CompletionGroup<B>>,
}

impl<B> CompletionToken<B>
where
  B: CompletionGroupBackend,
{
  pub(crate) const fn new(group: CompletionGroup<B>) -> Self {
    Self { group: Some(group) }
  }

  /// Leaves the group now and consumes the token.
  ///
  /// # Errors
  /// Propagates the error of [`CompletionGroup::leave`].
  pub fn complete(mut self) -> Result<(), CompletionGroupError> {
    match self.group.take() {
      | Some(group) => group.leave(),
      | None => Ok(()),
    }
  }
}

impl<B> Drop for CompletionToken<B>
where
  B: CompletionGroupBackend,
{
  fn drop(&mut self) {
    if let Some(group) = self.group.take() {
      // release() already reports the mismatch through tracing.
      let _ = group.release();
    }
  }
}
