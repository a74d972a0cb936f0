//! Dashboard view models: position rows and the statistics summary.

use shared::dto::vault::{Position, VaultStats};

use crate::registry::chains::chain_name;
use crate::utils::format::{
    format_currency, format_percentage, format_time_ago, format_token_amount,
};

/// One position, formatted for a dashboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    pub position_id: String,
    pub chain: String,
    pub token_symbol: String,
    pub balance: String,
    pub apy: String,
    pub yield_earned: String,
    pub updated: String,
}

/// Headline statistics, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_balance: String,
    pub total_yield_earned: String,
    pub average_apy: String,
    pub monthly_yield_estimate: String,
    pub positions_count: usize,
}

pub fn position_rows(positions: &[Position]) -> Vec<PositionRow> {
    positions
        .iter()
        .map(|position| PositionRow {
            position_id: position.id.clone(),
            chain: chain_name(position.chain_id),
            token_symbol: position.token_symbol.clone(),
            balance: format_token_amount(position.balance, 4),
            apy: format_percentage(position.apy, 2),
            yield_earned: format_token_amount(position.yield_earned, 6),
            updated: format_time_ago(position.last_updated),
        })
        .collect()
}

pub fn stats_summary(stats: &VaultStats) -> StatsSummary {
    StatsSummary {
        total_balance: format_currency(stats.total_balance),
        total_yield_earned: format_currency(stats.total_yield_earned),
        average_apy: format_percentage(stats.average_apy, 2),
        monthly_yield_estimate: format_currency(stats.monthly_yield_estimate),
        positions_count: stats.positions_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ETHEREUM, POLYGON};
    use chrono::Utc;

    fn position(chain_id: u64, token: &str, balance: f64) -> Position {
        Position {
            id: format!("pos-{}-{}", chain_id, token),
            chain_id,
            token_symbol: token.to_string(),
            balance,
            apy: 8.5,
            yield_earned: 0.0123,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_position_rows() {
        let rows = position_rows(&[position(ETHEREUM, "ETH", 1.5), position(POLYGON, "USDC", 250.0)]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chain, "Ethereum");
        assert_eq!(rows[0].balance, "1.5");
        assert_eq!(rows[0].apy, "8.50%");
        assert_eq!(rows[1].chain, "Polygon");
        assert_eq!(rows[1].balance, "250");
    }

    #[test]
    fn test_stats_summary() {
        let summary = stats_summary(&VaultStats {
            total_balance: 8550.0,
            total_yield_earned: 12.5,
            average_apy: 9.25,
            monthly_yield_estimate: 65.9,
            positions_count: 3,
        });
        assert_eq!(summary.total_balance, "$8,550.00");
        assert_eq!(summary.average_apy, "9.25%");
        assert_eq!(summary.positions_count, 3);
    }

    #[test]
    fn test_empty_stats_render_as_zero() {
        let summary = stats_summary(&VaultStats::default());
        assert_eq!(summary.total_balance, "$0.00");
        assert_eq!(summary.average_apy, "0.00%");
    }
}
