//! # Statistics Recomputation
//!
//! A pure fold over the current position set. Statistics are derived,
//! non-authoritative data: they are recomputed wholesale after every position
//! mutation and never mutated independently.

use shared::dto::vault::{Position, VaultStats};

/// Recompute vault statistics from the current positions.
///
/// Empty position sets yield all-zero statistics; the average APY is never
/// NaN or infinite.
pub fn recompute(positions: &[Position]) -> VaultStats {
    let total_balance: f64 = positions.iter().map(|p| p.balance).sum();
    let total_yield_earned: f64 = positions.iter().map(|p| p.yield_earned).sum();

    let average_apy = if positions.is_empty() {
        0.0
    } else {
        positions.iter().map(|p| p.apy).sum::<f64>() / positions.len() as f64
    };

    let monthly_yield_estimate = total_balance * (average_apy / 100.0) / 12.0;

    VaultStats {
        total_balance,
        total_yield_earned,
        average_apy,
        monthly_yield_estimate,
        positions_count: positions.len(),
    }
}
