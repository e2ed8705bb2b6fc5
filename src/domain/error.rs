use thiserror::Error;

/// Reasons an action leaves the account untouched.
///
/// These never escape `transition`: a rejected action is a no-op, so the reducer
/// swallows them. Handlers return them so the rule that failed is explicit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Account is already open")]
    AlreadyActive,
    #[error("Account is not open")]
    Inactive,
    #[error("Insufficient funds for withdrawal")]
    InsufficientFunds,
    #[error("A loan is already outstanding")]
    LoanOutstanding,
    #[error("Balance does not cover the outstanding loan")]
    LoanNotCovered,
    #[error("Account still holds money or debt")]
    NotSettled,
    #[error("Balance would overflow")]
    BalanceOverflow,
    #[error("Unknown action type: {0}")]
    UnknownAction(String),
}

/// Failures of the presentation shell and script replay. The account itself cannot fail.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
