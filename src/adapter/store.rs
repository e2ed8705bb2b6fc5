use crate::{
    adapter::reduce_with_event,
    domain::{AccountCommand, AccountState, Action},
    port::{StateChange, StateObserver},
};
use std::sync::Arc;

/// Owner of the single account state.
///
/// Every dispatch replaces the state wholesale with the reducer's result. Observers are
/// told about changes only; a rejected or unknown action leaves no trace.
pub struct AccountStore {
    state: AccountState,
    observers: Vec<Arc<dyn StateObserver>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::with_state(AccountState::INITIAL)
    }

    /// Start from an arbitrary state instead of the initial one.
    pub fn with_state(state: AccountState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to state changes
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    /// Apply a raw action. Unknown action types are ignored.
    pub fn dispatch(&mut self, action: &Action) -> &AccountState {
        match AccountCommand::try_from(action) {
            Ok(command) => self.dispatch_command(&command),
            Err(_) => &self.state,
        }
    }

    pub fn dispatch_command(&mut self, command: &AccountCommand) -> &AccountState {
        let previous = self.state;
        let (next, event) = reduce_with_event(&previous, command);
        let Some(event) = event else {
            return &self.state;
        };

        self.state = next;

        if self.state != previous {
            let change = StateChange {
                previous,
                current: self.state,
                event,
            };
            for observer in &self.observers {
                observer.on_change(&change);
            }
        }

        &self.state
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
