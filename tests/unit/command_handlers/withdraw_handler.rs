use bank::adapter::decide;
use bank::domain::*;
use bank::port::ActionHandler;

use crate::context::state;

#[test]
fn test_withdrawal_validates_sufficient_funds() {
    let result = Withdraw.validate(&state(49, 0, true));

    assert_eq!(result, Err(TransitionError::InsufficientFunds));
}

#[test]
fn test_withdrawal_allows_exact_amount() {
    let account = state(WITHDRAW_AMOUNT, 0, true);

    Withdraw.validate(&account).unwrap();
    let event = Withdraw.emit(&account);

    match event {
        AccountEvent::Withdrawn(w) => assert_eq!(w.amount, 50),
        _ => panic!("Expected Withdrawn event"),
    }
}

#[test]
fn test_withdrawal_gated_on_active_before_funds() {
    let command = AccountCommand::Withdraw(Withdraw);

    // Inactive with no funds: the active gate reports first
    let result = decide(&state(0, 0, false), &command);

    assert_eq!(result, Err(TransitionError::Inactive));
}

#[test]
fn test_deposit_rejects_overflow() {
    let result = Deposit.validate(&state(i64::MAX, 0, true));

    assert_eq!(result, Err(TransitionError::BalanceOverflow));
}
