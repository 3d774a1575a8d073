//! Completion-group primitives.

mod completion_group_backend;
mod completion_group_config;
mod completion_group_error;
mod completion_group_struct;
mod completion_state;
mod completion_token;
mod wait_status;

pub use completion_group_backend::CompletionGroupBackend;
pub use completion_group_config::{CompletionGroupConfig, UnderflowPolicy};
pub use completion_group_error::CompletionGroupError;
pub use completion_group_struct::CompletionGroup;
pub use completion_state::{CompletionState, LeaveOutcome};
pub use completion_token::CompletionToken;
pub use wait_status::WaitStatus;
