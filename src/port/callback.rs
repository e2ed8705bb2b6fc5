use crate::domain::{AccountEvent, AccountState};

/// A transition that actually changed the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub previous: AccountState,
    pub current: AccountState,
    pub event: AccountEvent,
}

/// Subscribers notified by the store after each state change.
///
/// Rejected actions leave the state as it was and produce no notification. The state
/// machine itself knows nothing about its observers.
pub trait StateObserver: Send + Sync {
    fn on_change(&self, change: &StateChange);
}
