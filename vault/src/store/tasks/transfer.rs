//! Cross-chain transfer lifecycle.
//!
//! Three sequentially awaited stages:
//!
//! 1. **Source confirmation**: the send-leg transaction completes and the
//!    transfer moves to `processing`.
//! 2. **Relay stamping**: an intermediate relay hash is attached; the
//!    externally observable status does not change.
//! 3. **Finalization**: after the remainder of the chain-scaled estimate, the
//!    receive-leg transaction is recorded, the destination position is
//!    credited, and the transfer completes.

use tracing::{debug, warn};

use crate::store::VaultStore;

pub(crate) async fn run(
    store: VaultStore,
    transfer_id: String,
    send_tx_id: String,
    from_chain: u64,
    to_chain: u64,
    token_symbol: String,
    amount: f64,
) {
    let config = store.config().clone();

    // Stage 1: confirmation on the source chain
    tokio::time::sleep(config.transfer_confirm_delay()).await;
    if config.roll_failure() {
        warn!(transfer_id = %transfer_id, "transfer failed before source confirmation");
        store.finalize_transaction(&send_tx_id, false);
        store.fail_transfer(&transfer_id);
        return;
    }
    store.confirm_transfer_send(&transfer_id, &send_tx_id);
    debug!(transfer_id = %transfer_id, "transfer source-confirmed");

    // Stage 2: relay stamping; status stays `processing`
    tokio::time::sleep(config.relay_delay()).await;
    if config.roll_failure() {
        // The send leg already completed; only the transfer fails
        store.fail_transfer(&transfer_id);
        return;
    }
    store.stamp_transfer_relay(&transfer_id);
    debug!(transfer_id = %transfer_id, "transfer relay-stamped");

    // Stage 3: completion on the destination chain
    tokio::time::sleep(config.finalize_delay(from_chain)).await;
    if config.roll_failure() {
        store.fail_transfer(&transfer_id);
        return;
    }
    store.finalize_transfer(&transfer_id, from_chain, to_chain, &token_symbol, amount);
}
