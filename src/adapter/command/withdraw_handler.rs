use crate::{
    domain::{AccountEvent, AccountState, TransitionError, WITHDRAW_AMOUNT, Withdraw, Withdrawn},
    port::ActionHandler,
};

impl ActionHandler for Withdraw {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        if state.balance < WITHDRAW_AMOUNT {
            return Err(TransitionError::InsufficientFunds);
        }

        Ok(())
    }

    fn emit(&self, _state: &AccountState) -> AccountEvent {
        AccountEvent::Withdrawn(Withdrawn {
            amount: WITHDRAW_AMOUNT,
        })
    }
}
