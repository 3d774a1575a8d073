use std::{
  sync::{Arc, Barrier},
  thread,
  time::Duration,
};

use joinery_core_rs::{CompletionGroupConfig, UnderflowPolicy, WaitStatus};
use tokio::join;

use super::{CompletionGroup, CompletionGroupTimeoutExt};

#[tokio::test]
async fn completion_group_completes() {
  let group = CompletionGroup::new();
  group.enter_many(2).unwrap();
  let worker_group = group.clone();

  let wait_fut = group.wait();
  let worker = async move {
    worker_group.leave().unwrap();
    worker_group.leave().unwrap();
  };

  join!(worker, wait_fut);
  assert_eq!(group.rounds_completed(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn wait_on_idle_group_returns_immediately() {
  let group = CompletionGroup::new();
  group.wait().await;
  assert_eq!(group.wait_timeout(Duration::from_millis(1)), WaitStatus::Completed);
}

#[test]
fn wait_timeout_times_out_then_completes() {
  let group = CompletionGroup::new();
  group.enter();

  assert_eq!(group.wait_timeout(Duration::from_millis(20)), WaitStatus::TimedOut);
  assert_eq!(group.pending(), 1);

  let worker_group = group.clone();
  let worker = thread::spawn(move || {
    thread::sleep(Duration::from_millis(10));
    worker_group.leave().unwrap();
  });

  assert_eq!(group.wait_timeout(Duration::from_secs(5)), WaitStatus::Completed);
  worker.join().unwrap();
  assert!(group.is_idle());
}

#[tokio::test(flavor = "current_thread")]
async fn async_timeout_reports_status() {
  let group = CompletionGroup::new();
  group.enter();

  assert_eq!(group.wait_async_timeout(Duration::from_millis(10)).await, WaitStatus::TimedOut);
  assert_eq!(group.pending(), 1);

  group.leave().unwrap();
  assert_eq!(group.wait_async_timeout(Duration::from_millis(10)).await, WaitStatus::Completed);
}

#[tokio::test(flavor = "current_thread")]
async fn waiter_is_released_when_next_round_starts_immediately() {
  let group = CompletionGroup::new();
  group.enter();

  let waiter_group = group.clone();
  let waiter = tokio::spawn(async move { waiter_group.wait().await });
  tokio::task::yield_now().await;

  group.leave().unwrap();
  group.enter();

  tokio::time::timeout(Duration::from_secs(5), waiter).await.expect("waiter released").unwrap();
  assert_eq!(group.pending(), 1);
  assert_eq!(group.rounds_completed(), 1);
}

#[test]
fn blocked_waiter_is_released_when_next_round_starts_immediately() {
  let group = CompletionGroup::new();
  group.enter();

  let started = Arc::new(Barrier::new(2));
  let waiter_group = group.clone();
  let waiter_started = Arc::clone(&started);
  let waiter = thread::spawn(move || {
    waiter_started.wait();
    waiter_group.wait_timeout(Duration::from_secs(5))
  });
  started.wait();
  thread::sleep(Duration::from_millis(50));

  group.leave().unwrap();
  group.enter();

  assert_eq!(waiter.join().unwrap(), WaitStatus::Completed);
  assert_eq!(group.pending(), 1);
  assert_eq!(group.rounds_completed(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn wait_future_created_before_settling_is_released() {
  let group = CompletionGroup::new();
  group.enter();

  let waiting = group.wait_async_timeout(Duration::from_secs(5));
  group.leave().unwrap();
  group.enter();

  assert_eq!(waiting.await, WaitStatus::Completed);
  assert_eq!(group.pending(), 1);
}

#[test]
fn underflow_is_reported_in_error_mode() {
  let group =
    CompletionGroup::with_config(CompletionGroupConfig::default().with_underflow_policy(UnderflowPolicy::ReturnError));
  assert!(group.leave().is_err());
  assert!(group.is_idle());
}

#[test]
fn debug_shows_counters() {
  let group = CompletionGroup::with_config(CompletionGroupConfig::default().with_label("debug"));
  group.enter();
  let rendered = format!("{:?}", group);
  assert!(rendered.contains("pending: 1"));
  assert!(rendered.contains("rounds_completed: 0"));
}
