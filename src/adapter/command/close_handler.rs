use crate::{
    domain::{AccountEvent, AccountState, CloseAccount, Closed, TransitionError},
    port::ActionHandler,
};

impl ActionHandler for CloseAccount {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        if !state.is_settled() {
            return Err(TransitionError::NotSettled);
        }

        Ok(())
    }

    fn emit(&self, _state: &AccountState) -> AccountEvent {
        AccountEvent::Closed(Closed)
    }
}
