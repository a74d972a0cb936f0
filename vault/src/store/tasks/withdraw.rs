//! Withdrawal confirmation lifecycle.

use tracing::{info, warn};

use crate::store::VaultStore;

/// Confirm a previously accepted withdrawal after the per-chain latency.
///
/// When a differing destination chain was requested, the cross-chain transfer
/// sub-protocol is initiated only after the source position mutation is
/// applied, so the transfer can never observe pre-withdrawal state. The route
/// was validated when the withdrawal was accepted, so the transfer starts
/// unconditionally; it must not re-validate against the registry, since the
/// source position (the proof the token lives on that chain) may already be
/// gone.
pub(crate) async fn run(
    store: VaultStore,
    tx_id: String,
    position_id: String,
    source_chain: u64,
    amount: f64,
    destination_chain: Option<u64>,
) {
    tokio::time::sleep(store.config().confirmation_delay(source_chain)).await;

    if store.config().roll_failure() {
        warn!(tx_id = %tx_id, position_id = %position_id, "withdrawal failed at confirmation");
        store.finalize_transaction(&tx_id, false);
        return;
    }

    // Snapshot the token before the position is possibly removed
    let token_symbol = store.position(&position_id).map(|p| p.token_symbol);

    if !store.confirm_withdrawal(&tx_id, &position_id, amount) {
        return;
    }
    info!(tx_id = %tx_id, position_id = %position_id, amount, "withdrawal confirmed");

    if let (Some(dest), Some(token)) = (destination_chain, token_symbol) {
        store.start_transfer(source_chain, dest, &token, amount);
    }
}
