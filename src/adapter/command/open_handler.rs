use crate::{
    domain::{AccountEvent, AccountState, OPENING_BALANCE, OpenAccount, Opened, TransitionError},
    port::ActionHandler,
};

impl ActionHandler for OpenAccount {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        if state.is_active {
            return Err(TransitionError::AlreadyActive);
        }

        Ok(())
    }

    fn emit(&self, _state: &AccountState) -> AccountEvent {
        AccountEvent::Opened(Opened {
            balance: OPENING_BALANCE,
        })
    }
}
