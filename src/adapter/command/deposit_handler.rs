use crate::{
    domain::{AccountEvent, AccountState, DEPOSIT_AMOUNT, Deposit, Deposited, TransitionError},
    port::ActionHandler,
};

impl ActionHandler for Deposit {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        state
            .balance
            .checked_add(DEPOSIT_AMOUNT)
            .map(|_| ())
            .ok_or(TransitionError::BalanceOverflow)
    }

    fn emit(&self, _state: &AccountState) -> AccountEvent {
        AccountEvent::Deposited(Deposited {
            amount: DEPOSIT_AMOUNT,
        })
    }
}
