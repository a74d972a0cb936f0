//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`VaultError`] used
//! consistently across all vault modules. It follows the `thiserror` pattern
//! for ergonomic error handling.
//!
//! ## Error Categories
//!
//! - **NotFound**: a referenced record (usually a position) does not exist
//! - **Validation**: rejected input (non-positive amount, amount over balance)
//! - **UnsupportedChain / UnsupportedToken**: the registry does not know the
//!   requested chain or token
//! - **Wallet**: pass-through errors from the wallet connector; the core does
//!   not reinterpret them
//! - **Config**: invalid configuration at startup
//!
//! ## Propagation Policy
//!
//! Not-found and validation errors reject the initiating call synchronously,
//! before any transaction is recorded or timer scheduled. Once an operation is
//! accepted, failures only occur through the configured failure-injection path
//! and surface as `failed` transaction records, never as errors.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use vault::core::error::{Result, VaultError};
//!
//! fn check_amount(amount: f64) -> Result<f64> {
//!     if amount <= 0.0 {
//!         return Err(VaultError::Validation("Amount must be positive".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, VaultError>`.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Application-wide error type covering all error scenarios in the vault.
///
/// Each variant includes descriptive context. The `#[error]` attribute from
/// `thiserror` provides the `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// A referenced record does not exist (e.g. withdrawing from an unknown
    /// position id). Rejected synchronously, no transaction is recorded.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input validation failure: non-positive amount, amount exceeding the
    /// available balance in strict mode, same-chain transfer, etc.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The chain id is not present in the registry.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    /// The token symbol is not supported on the given chain.
    #[error("Unsupported token {symbol} on chain {chain_id}")]
    UnsupportedToken { chain_id: u64, symbol: String },

    /// Wallet connector error, surfaced to the caller unchanged.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Invalid configuration detected at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::services::wallet::WalletError> for VaultError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        VaultError::Wallet(err.to_string())
    }
}
