//! # External Service Collaborators
//!
//! - **[`wallet`]**: Mock wallet connector. Owns connection state (address,
//!   active chain, native balance) and exposes connect/disconnect/switch-chain
//!   operations. The vault store treats it as an opaque source of the current
//!   user address and chain.

pub mod wallet;
