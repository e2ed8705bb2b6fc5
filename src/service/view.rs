use crate::domain::{
    AccountCommand, AccountState, DEPOSIT_AMOUNT, LOAN_AMOUNT, WITHDRAW_AMOUNT,
};
use std::fmt::{Display, Formatter};

/// A button of the shell: one per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub command: AccountCommand,
    pub label: String,
    pub enabled: bool,
}

/// Everything the shell displays, derived from the account state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub balance: i64,
    pub loan: u32,
    pub is_active: bool,
    pub triggers: Vec<Trigger>,
}

impl AccountView {
    /// Trigger by its 1-based position on screen
    pub fn trigger(&self, number: usize) -> Option<&Trigger> {
        number.checked_sub(1).and_then(|index| self.triggers.get(index))
    }

    pub fn is_enabled(&self, command: &AccountCommand) -> bool {
        self.triggers
            .iter()
            .any(|trigger| trigger.command == *command && trigger.enabled)
    }
}

impl From<&AccountState> for AccountView {
    fn from(state: &AccountState) -> Self {
        let triggers = AccountCommand::ALL
            .iter()
            .map(|command| Trigger {
                command: *command,
                label: label(command),
                // Only opening is offered while the account is closed
                enabled: state.is_active || !command.requires_active(),
            })
            .collect();

        Self {
            balance: state.balance,
            loan: state.loan,
            is_active: state.is_active,
            triggers,
        }
    }
}

fn label(command: &AccountCommand) -> String {
    match command {
        AccountCommand::OpenAccount(_) => "Open account".to_string(),
        AccountCommand::Deposit(_) => format!("Deposit {}", DEPOSIT_AMOUNT),
        AccountCommand::Withdraw(_) => format!("Withdraw {}", WITHDRAW_AMOUNT),
        AccountCommand::RequestLoan(_) => format!("Request a loan of {}", LOAN_AMOUNT),
        AccountCommand::PayLoan(_) => "Pay loan".to_string(),
        AccountCommand::CloseAccount(_) => "Close account".to_string(),
    }
}

impl Display for AccountView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_active { "active" } else { "inactive" };
        writeln!(
            f,
            "Balance: {} | Loan: {} | Account: {}",
            self.balance, self.loan, status
        )?;

        for (index, trigger) in self.triggers.iter().enumerate() {
            if trigger.enabled {
                writeln!(f, "  [{}] {}", index + 1, trigger.label)?;
            } else {
                writeln!(f, "  [{}] {} (disabled)", index + 1, trigger.label)?;
            }
        }

        Ok(())
    }
}
