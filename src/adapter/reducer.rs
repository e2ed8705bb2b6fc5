use crate::{
    domain::{AccountCommand, AccountEvent, AccountState, Action, TransitionError},
    port::{ActionHandler, EventHandler},
};

/// Next account state for a raw action.
///
/// Total and pure: unknown action types and rejected actions both return the input
/// state unchanged, and nothing is reported either way.
pub fn transition(state: &AccountState, action: &Action) -> AccountState {
    match AccountCommand::try_from(action) {
        Ok(command) => reduce(state, &command),
        Err(_) => *state,
    }
}

/// Next account state for a recognised command.
pub fn reduce(state: &AccountState, command: &AccountCommand) -> AccountState {
    reduce_with_event(state, command).0
}

/// Like `reduce`, also returning the event when the command was accepted.
pub fn reduce_with_event(
    state: &AccountState,
    command: &AccountCommand,
) -> (AccountState, Option<AccountEvent>) {
    match decide(state, command) {
        Ok(event) => (event.apply(state), Some(event)),
        Err(_) => (*state, None),
    }
}

/// Run the active gate and the handler's rule, returning the event an accepted
/// command produces.
///
/// Every action except opening is gated on `is_active` before its own rule is checked.
pub fn decide(
    state: &AccountState,
    command: &AccountCommand,
) -> Result<AccountEvent, TransitionError> {
    if command.requires_active() && !state.is_active {
        return Err(TransitionError::Inactive);
    }

    command.validate(state)?;

    Ok(command.emit(state))
}
