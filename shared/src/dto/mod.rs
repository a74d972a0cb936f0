//! # Domain Objects
//!
//! This module contains the data structures shared between the vault core and
//! the presentation layer.
//!
//! ## Module Organization
//!
//! - [`chain`] - Chain metadata and token descriptors
//! - [`vault`] - Positions, transactions, and vault statistics
//! - [`transfer`] - Cross-chain transfer records
//!
//! ## Serialization Format
//!
//! All types use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Status enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Transaction kinds**: Internally tagged with `#[serde(tag = "type")]`

pub mod chain;
pub mod transfer;
pub mod vault;

pub use chain::*;
pub use transfer::*;
pub use vault::*;
