use crate::{
    domain::{AccountEvent, AccountState, LoanRepaid, PayLoan, TransitionError},
    port::ActionHandler,
};

impl ActionHandler for PayLoan {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        if state.balance < i64::from(state.loan) {
            return Err(TransitionError::LoanNotCovered);
        }

        Ok(())
    }

    /// Repays whatever is outstanding. With no loan this repays zero and the state is
    /// left as it was.
    fn emit(&self, state: &AccountState) -> AccountEvent {
        AccountEvent::LoanRepaid(LoanRepaid { amount: state.loan })
    }
}
