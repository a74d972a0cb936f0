//! # ZetaVault Demo Binary
//!
//! Runs a scripted end-to-end scenario against an in-process vault: connect
//! the demo wallet, deposit on two chains, accrue a day of yield, then move a
//! position across chains, printing the dashboard after each phase.
//!
//! Uses [`VaultConfig::demo`], which compresses the nominal minutes-long
//! lifecycles into a few seconds of wall-clock time.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use vault::config::VaultConfig;
use vault::core::error::Result;
use vault::core::service::WalletConnector;
use vault::registry::{ETHEREUM, POLYGON};
use vault::services::wallet::MockWallet;
use vault::store::VaultStore;
use vault::views;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = VaultConfig::demo();
    let store = VaultStore::new(config);

    // Log every state mutation as it happens
    let events = store.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            debug!(?event, "store event");
        }
    });

    let wallet: Arc<dyn WalletConnector> = Arc::new(MockWallet::new());
    let user = wallet.connect().await?;
    info!(user = %user, "demo session started");

    // Phase 1: deposits on two chains, including a top-up
    store.deposit(ETHEREUM, "ETH", 2.5, &user)?;
    store.deposit(POLYGON, "USDC", 1_000.0, &user)?;
    store.deposit(POLYGON, "USDC", 500.0, &user)?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    print_dashboard(&store, "after deposits");

    // Phase 2: a day of yield
    let credited = store.accrue_yield();
    info!(credited, "yield accrual applied");
    print_dashboard(&store, "after yield accrual");

    // Phase 3: move the Ethereum position to Polygon
    let eth_position = store
        .positions()
        .into_iter()
        .find(|p| p.chain_id == ETHEREUM)
        .map(|p| p.id);
    if let Some(position_id) = eth_position {
        store.withdraw(&position_id, 2.5, Some(POLYGON), &user)?;
        // Confirmation plus the full scaled transfer window
        tokio::time::sleep(Duration::from_secs(8)).await;
    }
    print_dashboard(&store, "after cross-chain withdrawal");

    println!("\n=== Transfers ===");
    for row in views::transfer_rows(&store.transfers()) {
        println!(
            "  {:<22} {:>14}  {:<10} {:>4.0}%  {}",
            row.route,
            row.amount,
            row.status,
            row.progress * 100.0,
            row.source_hash
        );
    }

    println!("\n=== History ===");
    for row in views::history_rows(&store.transactions()) {
        println!(
            "  {:<20} {:<22} {:>16}  {:<10} {}",
            row.label, row.route, row.amount, row.status, row.age
        );
    }

    wallet.disconnect();
    Ok(())
}

fn print_dashboard(store: &VaultStore, phase: &str) {
    let summary = views::stats_summary(&store.stats());
    println!("\n=== Dashboard ({}) ===", phase);
    println!(
        "  total {}  yield {}  avg APY {}  monthly est. {}  positions {}",
        summary.total_balance,
        summary.total_yield_earned,
        summary.average_apy,
        summary.monthly_yield_estimate,
        summary.positions_count
    );
    for row in views::position_rows(&store.positions()) {
        println!(
            "  {:<10} {:<6} balance {:>12}  APY {:>7}  earned {}",
            row.chain, row.token_symbol, row.balance, row.apy, row.yield_earned
        );
    }
}
