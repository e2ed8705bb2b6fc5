use crate::{
    domain::{
        AccountEvent, AccountState, Closed, Deposited, LoanGranted, LoanRepaid, Opened, Withdrawn,
    },
    port::EventHandler,
};

impl EventHandler for AccountEvent {
    fn apply(&self, state: &AccountState) -> AccountState {
        match self {
            AccountEvent::Opened(event) => event.apply(state),
            AccountEvent::Deposited(event) => event.apply(state),
            AccountEvent::Withdrawn(event) => event.apply(state),
            AccountEvent::LoanGranted(event) => event.apply(state),
            AccountEvent::LoanRepaid(event) => event.apply(state),
            AccountEvent::Closed(event) => event.apply(state),
        }
    }
}

impl EventHandler for Opened {
    fn apply(&self, _state: &AccountState) -> AccountState {
        AccountState {
            balance: self.balance,
            loan: 0,
            is_active: true,
        }
    }
}

impl EventHandler for Deposited {
    fn apply(&self, state: &AccountState) -> AccountState {
        AccountState {
            balance: state.balance.saturating_add(self.amount),
            ..*state
        }
    }
}

impl EventHandler for Withdrawn {
    fn apply(&self, state: &AccountState) -> AccountState {
        AccountState {
            balance: state.balance.saturating_sub(self.amount),
            ..*state
        }
    }
}

impl EventHandler for LoanGranted {
    fn apply(&self, state: &AccountState) -> AccountState {
        AccountState {
            balance: state.balance.saturating_add(i64::from(self.amount)),
            loan: state.loan.saturating_add(self.amount),
            ..*state
        }
    }
}

impl EventHandler for LoanRepaid {
    fn apply(&self, state: &AccountState) -> AccountState {
        AccountState {
            balance: state.balance.saturating_sub(i64::from(self.amount)),
            loan: 0,
            ..*state
        }
    }
}

impl EventHandler for Closed {
    fn apply(&self, _state: &AccountState) -> AccountState {
        AccountState::INITIAL
    }
}
