mod thread_executor;
mod tokio_executor;

#[cfg(test)]
mod tests;

pub use thread_executor::ThreadExecutor;
pub use tokio_executor::TokioExecutor;
