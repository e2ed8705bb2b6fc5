mod close_handler;
mod deposit_handler;
mod open_handler;
mod pay_loan_handler;
mod request_loan_handler;
mod withdraw_handler;

use crate::domain::{AccountCommand, AccountEvent, AccountState, TransitionError};
use crate::port::ActionHandler;

impl ActionHandler for AccountCommand {
    fn validate(&self, state: &AccountState) -> Result<(), TransitionError> {
        match self {
            AccountCommand::OpenAccount(cmd) => cmd.validate(state),
            AccountCommand::Deposit(cmd) => cmd.validate(state),
            AccountCommand::Withdraw(cmd) => cmd.validate(state),
            AccountCommand::RequestLoan(cmd) => cmd.validate(state),
            AccountCommand::PayLoan(cmd) => cmd.validate(state),
            AccountCommand::CloseAccount(cmd) => cmd.validate(state),
        }
    }

    fn emit(&self, state: &AccountState) -> AccountEvent {
        match self {
            AccountCommand::OpenAccount(cmd) => cmd.emit(state),
            AccountCommand::Deposit(cmd) => cmd.emit(state),
            AccountCommand::Withdraw(cmd) => cmd.emit(state),
            AccountCommand::RequestLoan(cmd) => cmd.emit(state),
            AccountCommand::PayLoan(cmd) => cmd.emit(state),
            AccountCommand::CloseAccount(cmd) => cmd.emit(state),
        }
    }
}
