/// What an accepted action did to the account. Events are applied immediately and
/// then dropped; nothing keeps a history of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEvent {
    Opened(Opened),
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    LoanGranted(LoanGranted),
    LoanRepaid(LoanRepaid),
    Closed(Closed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposited {
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawn {
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanGranted {
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRepaid {
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed;
