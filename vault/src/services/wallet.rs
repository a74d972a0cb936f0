//! # Wallet Connector
//!
//! Manages the simulated wallet connection: connect/disconnect, chain
//! switching, and the native balance read. There is no real provider behind
//! it; connecting yields a fixed demo identity on ZetaChain.
//!
//! Connector errors are surfaced to the calling page as rejected operations;
//! the vault core neither catches nor reinterprets them.

use std::time::Duration;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::core::service::WalletConnector;
use crate::registry::{chain_by_id, ZETACHAIN};

/// Demo wallet identity used when no real provider is present.
const DEMO_ADDRESS: &str = "0xDEMO000000000000000000000000000000000000";
const DEMO_BALANCE: f64 = 10.0;

/// Simulated latency of the provider's connection prompt.
const CONNECT_DELAY: Duration = Duration::from_millis(300);

/// Wallet connector errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No wallet provider is available in the environment.
    #[error("No wallet provider installed")]
    NotInstalled,
    /// The user rejected the connection request.
    #[error("Connection rejected by user")]
    ConnectionRejected,
    /// The requested chain is not in the registry.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),
    /// An operation that requires a connection was called while disconnected.
    #[error("Wallet not connected")]
    NotConnected,
}

/// Wallet connection state.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    /// Not connected, not attempting.
    Disconnected,
    /// Connection request in flight.
    Connecting,
    /// Connected with the user's identity.
    Connected {
        address: String,
        chain_id: u64,
        /// Native currency balance on the active chain.
        balance: f64,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }
}

/// Mock wallet connector holding in-memory connection state.
///
/// Cheap to clone is not needed here; consumers share it behind an `Arc`.
pub struct MockWallet {
    state: RwLock<ConnectionState>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ConnectionState::Disconnected),
        }
    }

    /// Snapshot of the current connection state.
    pub fn state(&self) -> ConnectionState {
        self.state.read().clone()
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WalletConnector for MockWallet {
    fn is_connected(&self) -> bool {
        self.state.read().is_connected()
    }

    fn address(&self) -> Option<String> {
        self.state.read().address().map(|s| s.to_string())
    }

    fn chain_id(&self) -> Option<u64> {
        match *self.state.read() {
            ConnectionState::Connected { chain_id, .. } => Some(chain_id),
            _ => None,
        }
    }

    fn native_balance(&self) -> f64 {
        match *self.state.read() {
            ConnectionState::Connected { balance, .. } => balance,
            _ => 0.0,
        }
    }

    async fn connect(&self) -> Result<String, WalletError> {
        *self.state.write() = ConnectionState::Connecting;

        // Simulate the provider's connection prompt round-trip
        tokio::time::sleep(CONNECT_DELAY).await;

        let address = DEMO_ADDRESS.to_string();
        *self.state.write() = ConnectionState::Connected {
            address: address.clone(),
            chain_id: ZETACHAIN,
            balance: DEMO_BALANCE,
        };
        info!(address = %address, chain_id = ZETACHAIN, "wallet connected");
        Ok(address)
    }

    fn disconnect(&self) {
        *self.state.write() = ConnectionState::Disconnected;
        info!("wallet disconnected");
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        if chain_by_id(chain_id).is_none() {
            return Err(WalletError::UnsupportedChain(chain_id));
        }

        let mut state = self.state.write();
        match &mut *state {
            ConnectionState::Connected {
                chain_id: current, ..
            } => {
                *current = chain_id;
                info!(chain_id, "wallet switched chain");
                Ok(())
            }
            _ => Err(WalletError::NotConnected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::POLYGON;

    #[tokio::test(start_paused = true)]
    async fn test_connect_yields_demo_identity() {
        let wallet = MockWallet::new();
        assert!(!wallet.is_connected());

        let address = wallet.connect().await.unwrap();
        assert_eq!(address, DEMO_ADDRESS);
        assert!(wallet.is_connected());
        assert_eq!(wallet.chain_id(), Some(ZETACHAIN));
        assert_eq!(wallet.native_balance(), DEMO_BALANCE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_chain() {
        let wallet = MockWallet::new();
        wallet.connect().await.unwrap();

        wallet.switch_chain(POLYGON).await.unwrap();
        assert_eq!(wallet.chain_id(), Some(POLYGON));

        let err = wallet.switch_chain(999).await.unwrap_err();
        assert_eq!(err, WalletError::UnsupportedChain(999));
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_requires_connection() {
        let wallet = MockWallet::new();
        let err = wallet.switch_chain(POLYGON).await.unwrap_err();
        assert_eq!(err, WalletError::NotConnected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_clears_state() {
        let wallet = MockWallet::new();
        wallet.connect().await.unwrap();
        wallet.disconnect();
        assert!(!wallet.is_connected());
        assert_eq!(wallet.address(), None);
        assert_eq!(wallet.native_balance(), 0.0);
    }
}
