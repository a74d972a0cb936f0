//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The vault core never initiates wallet operations; presentation code calls
//! the connector directly and then calls into the store using the resulting
//! address and chain. The trait boundary keeps the connector swappable in
//! tests.

use crate::services::wallet::WalletError;
use async_trait::async_trait;

/// Trait for wallet connector operations.
///
/// This trait allows for dependency injection and mocking in tests. The only
/// production implementation is [`MockWallet`](crate::services::wallet::MockWallet),
/// which simulates an injected browser wallet.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Whether a wallet is currently connected.
    fn is_connected(&self) -> bool;

    /// Address of the connected wallet, if any.
    fn address(&self) -> Option<String>;

    /// Chain id the wallet is currently on, if connected.
    fn chain_id(&self) -> Option<u64>;

    /// Native currency balance of the connected wallet.
    fn native_balance(&self) -> f64;

    /// Connect the wallet.
    async fn connect(&self) -> Result<String, WalletError>;

    /// Disconnect and clear connection state.
    fn disconnect(&self);

    /// Switch the wallet to another supported chain.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;
}
