use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::TransitionError;

/// An action as it arrives from the outside: only a `type` name, no payload.
///
/// Any string is representable so that unknown kinds can reach the reducer and be
/// ignored there instead of failing at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl From<&AccountCommand> for Action {
    fn from(command: &AccountCommand) -> Self {
        Self::new(command.type_name())
    }
}

/// The six recognised actions.
///
/// Each variant wraps the handler for that action kind, the same way the handlers are
/// dispatched by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountCommand {
    OpenAccount(OpenAccount),
    Deposit(Deposit),
    Withdraw(Withdraw),
    RequestLoan(RequestLoan),
    PayLoan(PayLoan),
    CloseAccount(CloseAccount),
}

impl AccountCommand {
    /// Every command, in the order the shell lays out its triggers.
    pub const ALL: [AccountCommand; 6] = [
        AccountCommand::OpenAccount(OpenAccount),
        AccountCommand::RequestLoan(RequestLoan),
        AccountCommand::Deposit(Deposit),
        AccountCommand::Withdraw(Withdraw),
        AccountCommand::PayLoan(PayLoan),
        AccountCommand::CloseAccount(CloseAccount),
    ];

    /// The wire name carried in `Action::kind`.
    pub fn type_name(&self) -> &'static str {
        match self {
            AccountCommand::OpenAccount(_) => "openAccount",
            AccountCommand::Deposit(_) => "deposit",
            AccountCommand::Withdraw(_) => "withdraw",
            AccountCommand::RequestLoan(_) => "requestLoan",
            AccountCommand::PayLoan(_) => "payLoan",
            AccountCommand::CloseAccount(_) => "closeAccount",
        }
    }

    /// Opening is the only action allowed on an inactive account.
    pub fn requires_active(&self) -> bool {
        !matches!(self, AccountCommand::OpenAccount(_))
    }
}

impl FromStr for AccountCommand {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openAccount" => Ok(Self::OpenAccount(OpenAccount)),
            "deposit" => Ok(Self::Deposit(Deposit)),
            "withdraw" => Ok(Self::Withdraw(Withdraw)),
            "requestLoan" => Ok(Self::RequestLoan(RequestLoan)),
            "payLoan" => Ok(Self::PayLoan(PayLoan)),
            "closeAccount" => Ok(Self::CloseAccount(CloseAccount)),
            other => Err(TransitionError::UnknownAction(other.to_string())),
        }
    }
}

impl TryFrom<&Action> for AccountCommand {
    type Error = TransitionError;

    fn try_from(action: &Action) -> Result<Self, Self::Error> {
        action.kind.parse()
    }
}

impl Display for AccountCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Opens an inactive account with the minimum opening deposit as its balance.
pub struct OpenAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Credits the fixed deposit amount.
pub struct Deposit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Debits the fixed withdrawal amount. Fails if the balance cannot cover it.
pub struct Withdraw;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Grants the fixed loan and credits it to the balance. Only one loan may be outstanding.
pub struct RequestLoan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Repays the whole outstanding loan from the balance, which must cover it.
pub struct PayLoan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Deactivates a settled account, returning it to the initial state.
pub struct CloseAccount;
