use bank::domain::Action;

use crate::context::*;

#[test]
fn test_unknown_action_is_noop() {
    for kind in ["", "transfer", "Deposit", "deposite", "OPENACCOUNT", "close"] {
        let mut ctx = TestContext::opened();

        ctx.apply(Action::new(kind));

        ctx.assert_state(500, 0, true);
    }
}

#[test]
fn test_unknown_action_on_inactive_account_is_noop() {
    let mut ctx = TestContext::new();

    ctx.apply(Action::new("withdrawAll"));

    ctx.assert_state(0, 0, false);
}
