use crate::adapter::{AccountStore, TracingObserver};
use std::sync::Arc;

/// Build the account store with its standard observers.
///
/// The account starts in the initial (closed) state; nothing is loaded from disk.
pub fn boot() -> AccountStore {
    let store = AccountStore::new().with_observer(Arc::new(TracingObserver));

    tracing::info!("Account store initialized");

    store
}
