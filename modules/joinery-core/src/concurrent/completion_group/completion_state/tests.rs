use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::{CompletionState, LeaveOutcome};
use crate::concurrent::{
  completion_group::CompletionGroupError,
  notification::{InlineExecutor, PendingNotification},
};

fn counting_notification(hits: &Arc<AtomicUsize>) -> PendingNotification {
  let hits = hits.clone();
  PendingNotification::new(InlineExecutor, move || {
    hits.fetch_add(1, Ordering::SeqCst);
  })
}

#[test]
fn starts_idle() {
  let state = CompletionState::new();
  assert_eq!(state.pending(), 0);
  assert_eq!(state.rounds_completed(), 0);
  assert_eq!(state.queued_notifications(), 0);
  assert!(state.has_settled_since(0));
}

#[test]
fn leave_reports_remaining_until_zero() {
  let mut state = CompletionState::new();
  assert_eq!(state.enter(3), Ok(3));

  assert!(matches!(state.leave(), Ok(LeaveOutcome::Pending { remaining: 2 })));
  assert!(matches!(state.leave(), Ok(LeaveOutcome::Pending { remaining: 1 })));
  match state.leave() {
    | Ok(LeaveOutcome::Settled { round, notifications }) => {
      assert_eq!(round, 1);
      assert!(notifications.is_empty());
    },
    | other => panic!("expected settled outcome, got {:?}", other),
  }
  assert_eq!(state.rounds_completed(), 1);
}

#[test]
fn leave_on_idle_state_underflows_without_mutation() {
  let mut state = CompletionState::new();
  assert_eq!(state.leave().err(), Some(CompletionGroupError::Underflow { rounds_completed: 0 }));
  assert_eq!(state.pending(), 0);

  state.enter(1).unwrap();
  state.leave().unwrap();
  assert_eq!(state.leave().err(), Some(CompletionGroupError::Underflow { rounds_completed: 1 }));
  assert_eq!(state.pending(), 0);
}

#[test]
fn enter_detects_overflow() {
  let mut state = CompletionState::new();
  state.enter(usize::MAX).unwrap();
  assert_eq!(state.enter(1).err(), Some(CompletionGroupError::Overflow { pending: usize::MAX, requested: 1 }));
  assert_eq!(state.pending(), usize::MAX);
}

#[test]
fn register_on_idle_state_hands_notification_back() {
  let hits = Arc::new(AtomicUsize::new(0));
  let mut state = CompletionState::new();

  let returned = state.register(counting_notification(&hits));
  assert!(returned.is_some());
  assert_eq!(state.queued_notifications(), 0);
}

#[test]
fn settled_outcome_drains_notifications_in_order() {
  let order = Arc::new(spin::Mutex::new(alloc::vec::Vec::new()));
  let mut state = CompletionState::new();
  state.enter(1).unwrap();

  for id in 0..3 {
    let order = order.clone();
    assert!(state.register(PendingNotification::new(InlineExecutor, move || order.lock().push(id))).is_none());
  }
  assert_eq!(state.queued_notifications(), 3);

  let Ok(LeaveOutcome::Settled { notifications, .. }) = state.leave() else {
    panic!("expected settled outcome");
  };
  assert_eq!(state.queued_notifications(), 0);
  notifications.into_iter().for_each(PendingNotification::dispatch);
  assert_eq!(order.lock().as_slice(), &[0, 1, 2]);
}

#[test]
fn settled_since_tracks_rounds() {
  let mut state = CompletionState::new();
  state.enter(1).unwrap();
  let observed = state.rounds_completed();
  assert!(!state.has_settled_since(observed));

  state.leave().unwrap();
  state.enter(1).unwrap();
  assert!(state.has_settled_since(observed));
  assert!(!state.has_settled_since(state.rounds_completed()));
}
