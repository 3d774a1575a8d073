#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::disallowed_types))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::naive_bytecount)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]

//! Completion groups for std runtimes.
//!
//! This crate binds the abstractions defined in `joinery_core_rs` to std and Tokio
//! implementations: a `Mutex`/`Condvar` backend that also wakes async waiters through Tokio's
//! `Notify`, notification executors for Tokio tasks and OS threads, and a deadline-bounded async
//! wait. The core types are re-exported so most users only depend on this crate.

/// Concurrency primitives backed by std and Tokio synchronization types.
pub mod concurrent;

pub use concurrent::{
  completion_group::{CompletionGroup, CompletionGroupTimeoutExt, CompletionToken, StdCompletionGroupBackend},
  notification::{ThreadExecutor, TokioExecutor},
};
pub use joinery_core_rs::{
  CompletionGroupBackend, CompletionGroupConfig, CompletionGroupError, CompletionState, InlineExecutor, LeaveOutcome,
  NotificationAction, NotificationExecutor, PendingNotification, UnderflowPolicy, WaitStatus,
};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use joinery_core_rs::{
    CompletionGroupConfig, CompletionGroupError, InlineExecutor, NotificationExecutor, UnderflowPolicy, WaitStatus,
  };

  pub use crate::concurrent::{
    completion_group::{CompletionGroup, CompletionGroupTimeoutExt, CompletionToken},
    notification::{ThreadExecutor, TokioExecutor},
  };
}
