use crate::domain::AccountEvent;
use crate::port::{StateChange, StateObserver};

/// Observer that writes every state change to the tracing log
pub struct TracingObserver;

impl StateObserver for TracingObserver {
    fn on_change(&self, change: &StateChange) {
        let action = match change.event {
            AccountEvent::Opened(_) => "opened",
            AccountEvent::Deposited(_) => "deposited",
            AccountEvent::Withdrawn(_) => "withdrawn",
            AccountEvent::LoanGranted(_) => "loan granted",
            AccountEvent::LoanRepaid(_) => "loan repaid",
            AccountEvent::Closed(_) => "closed",
        };

        tracing::debug!(
            "Account {}: balance {} -> {}, loan {} -> {}, active={}",
            action,
            change.previous.balance,
            change.current.balance,
            change.previous.loan,
            change.current.loan,
            change.current.is_active
        );
    }
}
