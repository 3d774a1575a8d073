//! Fan-out/fan-in over simulated requests.
//!
//! Every request is entered up front, then dispatched as its own Tokio task. The completion
//! notification runs on the Tokio executor once the last response arrives, while `main` awaits
//! the same group with a deadline.

use std::{
  sync::{Arc, Mutex},
  time::{Duration, Instant},
};

use joinery_std_rs::prelude::*;
use tracing_subscriber::FmtSubscriber;

const REQUESTS: [(&str, u64); 4] = [("profile", 120), ("avatar", 80), ("feed", 200), ("settings", 40)];

#[tokio::main]
async fn main() {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,joinery_core_rs=debug"));
  let _ = FmtSubscriber::builder().with_env_filter(env_filter).try_init();

  let group = CompletionGroup::with_config(CompletionGroupConfig::default().with_label("page-load"));
  let responses = Arc::new(Mutex::new(Vec::new()));
  let started = Instant::now();

  // All units are registered before any of them can finish.
  group.enter_many(REQUESTS.len()).expect("request count fits in usize");

  let summary = responses.clone();
  let executor = TokioExecutor::current().expect("running inside the tokio runtime");
  group.notify(executor, move || {
    let responses = summary.lock().map(|guard| guard.clone()).unwrap_or_default();
    tracing::info!(?responses, elapsed = ?started.elapsed(), "all requests finished");
  });

  for (name, latency_ms) in REQUESTS {
    let group = group.clone();
    let responses = responses.clone();
    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_millis(latency_ms)).await;
      if let Ok(mut responses) = responses.lock() {
        responses.push(name);
      }
      tracing::info!(request = name, latency_ms, "request finished");
      if let Err(err) = group.leave() {
        tracing::error!(error = %err, "request left the group twice");
      }
    });
  }

  match group.wait_async_timeout(Duration::from_secs(2)).await {
    | WaitStatus::Completed => tracing::info!(rounds = group.rounds_completed(), "page ready"),
    | WaitStatus::TimedOut => tracing::warn!(pending = group.pending(), "page load timed out"),
  }

  // Give the notification task a chance to log before the runtime shuts down.
  tokio::time::sleep(Duration::from_millis(10)).await;
}
