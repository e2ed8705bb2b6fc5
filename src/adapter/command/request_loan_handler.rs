use crate::{
    domain::{AccountEvent, AccountState, LOAN_AMOUNT, LoanGranted, RequestLoan, TransitionError},
    port::ActionHandler,
};

impl ActionHandler for RequestLoan {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        // At most one loan at a time
        if state.has_loan() {
            return Err(TransitionError::LoanOutstanding);
        }

        state
            .balance
            .checked_add(i64::from(LOAN_AMOUNT))
            .map(|_| ())
            .ok_or(TransitionError::BalanceOverflow)
    }

    fn emit(&self, _state: &AccountState) -> AccountEvent {
        AccountEvent::LoanGranted(LoanGranted {
            amount: LOAN_AMOUNT,
        })
    }
}
