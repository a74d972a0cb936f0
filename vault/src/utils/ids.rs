//! Identifier and mock-hash generation.

use rand::Rng;
use uuid::Uuid;

/// Generate a prefixed record id, e.g. `pos-1c9e...` or `tx-ab12...`.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Generate a random 32-byte hex string shaped like an EVM transaction hash.
///
/// Purely cosmetic: nothing verifies these, they only make history views look
/// like real explorer data.
pub fn mock_tx_hash() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
