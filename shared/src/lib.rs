//! # Shared Domain Types Library
//!
//! This library defines the domain vocabulary used by the vault application:
//! chains, tokens, positions, transactions, cross-chain transfers, and derived
//! statistics. All types use JSON serialization via `serde` so snapshots can be
//! exported or inspected without extra glue.
//!
//! ## Structure
//!
//! - **[`dto`]**: Domain objects
//!   - **[`dto::chain`]**: Chain and token metadata
//!   - **[`dto::vault`]**: Positions, transactions, and statistics
//!   - **[`dto::transfer`]**: Cross-chain transfer records
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All types serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Status enums serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a domain-type library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
