use crate::domain::AccountState;

/// EventHandler is responsible for applying an event to the state.
///
/// EventHandler#apply is a pure function: it builds a new state from the previous one
/// and never mutates it in place.
pub trait EventHandler {
    fn apply(&self, state: &AccountState) -> AccountState;
}
