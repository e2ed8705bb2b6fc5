use bank::domain::*;
use bank::port::ActionHandler;

use crate::context::state;

#[test]
fn test_close_requires_settled_account() {
    for account in [state(500, 0, true), state(0, 5000, true), state(-10, 0, true)] {
        assert_eq!(
            CloseAccount.validate(&account),
            Err(TransitionError::NotSettled),
            "Should reject closing {:?}",
            account
        );
    }
}

#[test]
fn test_close_emits_closed() {
    let account = state(0, 0, true);

    CloseAccount.validate(&account).unwrap();

    assert_eq!(CloseAccount.emit(&account), AccountEvent::Closed(Closed));
}
