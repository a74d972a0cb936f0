//! End-to-end lifecycle scenarios through the public API.

use std::time::Duration;

use vault::config::VaultConfig;
use vault::registry::{BNB_CHAIN, ETHEREUM, POLYGON};
use vault::store::VaultStore;

use shared::dto::transfer::TransferStatus;
use shared::dto::vault::{TransactionKind, TxStatus};

const USER: &str = "0xDEMO000000000000000000000000000000000000";

async fn settle(seconds: u64) {
    tokio::time::sleep(Duration::from_secs(seconds)).await;
}

#[tokio::test(start_paused = true)]
async fn cross_chain_withdrawal_end_to_end() {
    let store = VaultStore::new(VaultConfig::default());

    let receipt = store.deposit(ETHEREUM, "ETH", 4.0, USER).unwrap();
    settle(20).await;
    assert_eq!(store.positions().len(), 1);

    store
        .withdraw(&receipt.position_id, 4.0, Some(POLYGON), USER)
        .unwrap();
    settle(700).await;

    // The value moved: the source position is gone, the destination holds it
    let positions = store.positions();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].chain_id, POLYGON);
    assert_eq!(positions[0].token_symbol, "ETH");
    assert_eq!(positions[0].balance, 4.0);
    assert_eq!(store.stats().total_balance, 4.0);

    // Full paper trail: deposit, withdrawal, send leg, receive leg
    let txs = store.transactions();
    assert_eq!(txs.len(), 4);
    assert!(txs.iter().all(|tx| tx.status == TxStatus::Completed));
    assert!(txs
        .iter()
        .any(|tx| matches!(tx.kind, TransactionKind::CrossChainReceive { from_chain } if from_chain == ETHEREUM)));

    let transfers = store.transfers();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].status, TransferStatus::Completed);
    assert_eq!(transfers[0].estimated_duration_ms, 600_000);
    assert!(transfers[0].relay_tx_hash.is_some());
    assert!(transfers[0].destination_tx_hash.is_some());
}

#[tokio::test(start_paused = true)]
async fn round_trip_withdrawal_conserves_value() {
    let store = VaultStore::new(VaultConfig::default());

    // Bridge ETH to Polygon, where it is not in the static token tables
    let receipt = store.deposit(ETHEREUM, "ETH", 10.0, USER).unwrap();
    settle(20).await;
    store
        .withdraw(&receipt.position_id, 10.0, Some(POLYGON), USER)
        .unwrap();
    settle(700).await;

    let bridged = store.positions();
    assert_eq!(bridged.len(), 1);
    assert_eq!(bridged[0].chain_id, POLYGON);

    // Bridge it back; the position itself proves the token lives there
    store
        .withdraw(&bridged[0].id, 10.0, Some(ETHEREUM), USER)
        .unwrap();
    settle(700).await;

    let positions = store.positions();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].chain_id, ETHEREUM);
    assert_eq!(positions[0].balance, 10.0);
    assert_eq!(store.stats().total_balance, 10.0);

    // Both legs produced a completed transfer record
    let transfers = store.transfers();
    assert_eq!(transfers.len(), 2);
    assert!(transfers
        .iter()
        .all(|t| t.status == TransferStatus::Completed));
    assert!(store
        .transactions()
        .iter()
        .all(|tx| tx.status == TxStatus::Completed));
}

#[tokio::test(start_paused = true)]
async fn overlapping_operations_conserve_balance() {
    let store = VaultStore::new(VaultConfig::default());

    // Several operations in flight at once across three chains
    store.deposit(ETHEREUM, "ETH", 1.0, USER).unwrap();
    store.deposit(POLYGON, "USDC", 500.0, USER).unwrap();
    store.deposit(BNB_CHAIN, "BNB", 3.0, USER).unwrap();
    store.deposit(POLYGON, "USDC", 250.0, USER).unwrap();
    settle(20).await;

    let positions = store.positions();
    assert_eq!(positions.len(), 3);
    let usdc = positions
        .iter()
        .find(|p| p.chain_id == POLYGON && p.token_symbol == "USDC")
        .unwrap();
    assert_eq!(usdc.balance, 750.0);
    assert_eq!(store.stats().total_balance, 754.0);
    assert_eq!(store.stats().positions_count, 3);

    // Partial withdrawal from one position leaves the others untouched
    store.withdraw(&usdc.id, 250.0, None, USER).unwrap();
    settle(10).await;
    assert_eq!(store.stats().total_balance, 504.0);
    assert_eq!(store.positions().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn demo_scale_compresses_the_whole_scenario() {
    let store = VaultStore::new(VaultConfig::demo());

    let receipt = store.deposit(POLYGON, "USDC", 100.0, USER).unwrap();
    settle(1).await;
    assert_eq!(store.positions().len(), 1);

    store
        .withdraw(&receipt.position_id, 100.0, Some(ETHEREUM), USER)
        .unwrap();
    // Scaled: 50ms confirmation + 3s transfer
    settle(10).await;

    let positions = store.positions();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].chain_id, ETHEREUM);
    // The record still carries the nominal estimate, not the scaled one
    assert_eq!(store.transfers()[0].estimated_duration_ms, 300_000);
}

#[tokio::test(start_paused = true)]
async fn yield_then_withdraw_keeps_earnings() {
    let store = VaultStore::new(VaultConfig::default());

    let receipt = store.deposit(POLYGON, "USDC", 1_000.0, USER).unwrap();
    settle(10).await;

    store.accrue_yield();
    store.accrue_yield();
    let earned = store.positions()[0].yield_earned;
    assert!(earned > 0.0);

    store.withdraw(&receipt.position_id, 400.0, None, USER).unwrap();
    settle(10).await;

    // Partial withdrawal does not touch accumulated yield
    let position = &store.positions()[0];
    assert_eq!(position.balance, 600.0);
    assert_eq!(position.yield_earned, earned);
    assert_eq!(store.stats().total_yield_earned, earned);
}
