use serde::Serialize;

/// Balance credited when an account is opened (minimum opening deposit).
pub const OPENING_BALANCE: i64 = 500;
/// Amount credited by a single deposit.
pub const DEPOSIT_AMOUNT: i64 = 150;
/// Amount debited by a single withdrawal.
pub const WITHDRAW_AMOUNT: i64 = 50;
/// Principal of the one loan an account may carry.
pub const LOAN_AMOUNT: u32 = 5000;

/// The whole account: there is exactly one per store.
///
/// `balance` is signed because paying off a loan may leave it negative.
/// `loan` is zero whenever the account is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountState {
    pub balance: i64,
    pub loan: u32,
    pub is_active: bool,
}

impl AccountState {
    /// State before opening and after a successful close.
    pub const INITIAL: AccountState = AccountState {
        balance: 0,
        loan: 0,
        is_active: false,
    };

    pub fn has_loan(&self) -> bool {
        self.loan > 0
    }

    /// Settled accounts carry neither money nor debt and may be closed.
    pub fn is_settled(&self) -> bool {
        self.loan == 0 && self.balance == 0
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::INITIAL
    }
}
