use crate::domain::{AccountEvent, AccountState, TransitionError};

/// One handler per action kind.
///
/// Both steps are pure: no I/O, no logging, no clock. The reducer has already checked
/// that the account is active for every action except opening, so handlers only state
/// their own business rule.
pub trait ActionHandler {
    /// Check the action against the current state.
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError>;

    /// Describe the change. Only called after `validate` succeeded.
    fn emit(&self, state: &AccountState) -> AccountEvent;
}
