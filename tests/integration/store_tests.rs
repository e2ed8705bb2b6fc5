use bank::adapter::{AccountStore, reduce_with_event};
use bank::domain::{AccountEvent, AccountState, Action};
use bank::port::{StateChange, StateObserver};
use std::sync::{Arc, Mutex};

use crate::context::*;

/// Observer that records every change it is told about
#[derive(Default)]
struct RecordingObserver {
    changes: Mutex<Vec<StateChange>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<AccountEvent> {
        self.changes
            .lock()
            .unwrap()
            .iter()
            .map(|change| change.event)
            .collect()
    }
}

impl StateObserver for RecordingObserver {
    fn on_change(&self, change: &StateChange) {
        self.changes.lock().unwrap().push(*change);
    }
}

#[test]
fn test_store_starts_at_initial_state() {
    let store = AccountStore::new();

    assert_eq!(*store.state(), AccountState::INITIAL);
}

#[test]
fn test_store_dispatch_matches_transition() {
    let mut store = AccountStore::new();
    let mut ctx = TestContext::new();

    for action in [open(), deposit(), request_loan(), withdraw(), pay_loan(), close()] {
        let expected = *ctx.apply(action.clone());
        let actual = *store.dispatch(&action);
        assert_eq!(actual, expected, "Store diverged on {}", action.kind);
    }
}

#[test]
fn test_observer_notified_on_change() {
    let observer = Arc::new(RecordingObserver::default());
    let mut store = AccountStore::new().with_observer(observer.clone());

    store.dispatch(&open());
    store.dispatch(&deposit());

    let changes = observer.changes.lock().unwrap().clone();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].previous, AccountState::INITIAL);
    assert_eq!(changes[0].current, state(500, 0, true));
    assert_eq!(changes[1].current, state(650, 0, true));
}

#[test]
fn test_rejected_actions_are_silent() {
    let observer = Arc::new(RecordingObserver::default());
    let mut store = AccountStore::new().with_observer(observer.clone());

    store.dispatch(&deposit());
    store.dispatch(&close());
    store.dispatch(&Action::new("transfer"));

    assert!(observer.events().is_empty());
    assert_eq!(*store.state(), AccountState::INITIAL);
}

#[test]
fn test_noop_pay_loan_is_not_reported() {
    let observer = Arc::new(RecordingObserver::default());
    let mut store = store_at(state(500, 0, true)).with_observer(observer.clone());

    store.dispatch(&pay_loan());

    assert!(observer.events().is_empty());
}

#[test]
fn test_all_observers_notified() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let mut store = AccountStore::new()
        .with_observer(first.clone())
        .with_observer(second.clone());

    store.dispatch_command(&command(&open()));

    assert_eq!(first.events().len(), 1);
    assert_eq!(second.events().len(), 1);
}

#[test]
fn test_reduce_with_event_reports_accepted_commands_only() {
    let (opened, event) = reduce_with_event(&AccountState::INITIAL, &command(&open()));
    assert_eq!(opened, state(500, 0, true));
    assert!(matches!(event, Some(AccountEvent::Opened(_))));

    let (unchanged, event) = reduce_with_event(&opened, &command(&close()));
    assert_eq!(unchanged, opened);
    assert_eq!(event, None);
}

#[test]
fn test_observer_sees_reducer_result() {
    let observer = Arc::new(RecordingObserver::default());
    let mut store = store_at(state(500, 0, true)).with_observer(observer.clone());
    let (expected, event) = reduce_with_event(store.state(), &command(&request_loan()));

    store.dispatch(&request_loan());

    let changes = observer.changes.lock().unwrap().clone();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].current, expected);
    assert_eq!(Some(changes[0].event), event);
}
