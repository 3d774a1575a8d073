use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc,
  },
  thread,
  time::Duration,
};

use joinery_core_rs::NotificationExecutor;
use tokio::sync::oneshot;

use super::{ThreadExecutor, TokioExecutor};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn tokio_executor_spawns_on_runtime() {
  let executor = TokioExecutor::current().expect("inside runtime");
  let (tx, rx) = oneshot::channel();

  executor.execute(Box::new(move || {
    let on_runtime = tokio::runtime::Handle::try_current().is_ok();
    let _ = tx.send(on_runtime);
  }));

  assert!(rx.await.unwrap());
}

#[test]
fn tokio_executor_requires_runtime() {
  assert!(TokioExecutor::current().is_err());
}

#[test]
fn tokio_executor_runs_inline_after_runtime_shutdown() {
  let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
  let executor = TokioExecutor::new(runtime.handle().clone());
  drop(runtime);

  let hits = Arc::new(AtomicUsize::new(0));
  let hits_clone = Arc::clone(&hits);
  executor.execute(Box::new(move || {
    hits_clone.fetch_add(1, Ordering::SeqCst);
  }));

  assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn thread_executor_uses_named_thread() {
  let executor = ThreadExecutor::new().with_name("joinery-notify");
  assert_eq!(executor.name(), Some("joinery-notify"));
  let (tx, rx) = mpsc::channel();

  executor.execute(Box::new(move || {
    let name = thread::current().name().map(str::to_owned);
    let _ = tx.send((thread::current().id(), name));
  }));

  let (thread_id, name) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
  assert_ne!(thread_id, thread::current().id());
  assert_eq!(name.as_deref(), Some("joinery-notify"));
}
