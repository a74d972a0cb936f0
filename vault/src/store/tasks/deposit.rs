//! Deposit confirmation lifecycle.

use tracing::{info, warn};

use crate::store::VaultStore;

/// Confirm a previously accepted deposit after the per-chain latency.
pub(crate) async fn run(
    store: VaultStore,
    tx_id: String,
    position_id: String,
    chain_id: u64,
    token_symbol: String,
    amount: f64,
) {
    tokio::time::sleep(store.config().confirmation_delay(chain_id)).await;

    if store.config().roll_failure() {
        warn!(tx_id = %tx_id, chain_id, "deposit failed at confirmation");
        store.finalize_transaction(&tx_id, false);
        return;
    }

    store.confirm_deposit(&tx_id, position_id, chain_id, &token_symbol, amount);
    info!(tx_id = %tx_id, chain_id, token = %token_symbol, amount, "deposit confirmed");
}
