//! # Chain/Token Registry
//!
//! Static lookup tables mapping chain identifiers to metadata and to supported
//! token lists. Read-only, process-wide, initialized once on first access,
//! never mutated.
//!
//! The store validates chain ids and token symbols against these tables; the
//! presentation layer uses them to populate selectors and explorer links.

pub mod chains;
pub mod tokens;

pub use chains::{chain_by_id, supported_chains, BNB_CHAIN, ETHEREUM, POLYGON, ZETACHAIN};
pub use tokens::{token_by_address, token_supported, tokens_for_chain};
