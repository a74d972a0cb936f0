//! Transaction history view models.

use shared::dto::vault::{Transaction, TransactionKind, TxStatus};

use crate::registry::chains::chain_name;
use crate::utils::format::{format_time_ago, format_token_amount, format_tx_hash};

/// One history entry, formatted for a table or list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub tx_id: String,
    pub label: String,
    /// Where the value moved: a single chain name, or "A -> B" for the
    /// cross-chain kinds.
    pub route: String,
    pub amount: String,
    pub status: String,
    /// Truncated hash, empty for hashless records such as yield accruals.
    pub hash: String,
    pub age: String,
    pub description: String,
}

fn status_label(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Pending => "Pending",
        TxStatus::Completed => "Completed",
        TxStatus::Failed => "Failed",
    }
}

fn route(tx: &Transaction) -> String {
    match &tx.kind {
        TransactionKind::CrossChainSend { to_chain } => {
            format!("{} -> {}", chain_name(tx.chain_id), chain_name(*to_chain))
        }
        TransactionKind::CrossChainReceive { from_chain } => {
            format!("{} -> {}", chain_name(*from_chain), chain_name(tx.chain_id))
        }
        TransactionKind::Withdraw {
            destination_chain: Some(dest),
        } if *dest != tx.chain_id => {
            format!("{} -> {}", chain_name(tx.chain_id), chain_name(*dest))
        }
        _ => chain_name(tx.chain_id),
    }
}

pub fn history_rows(transactions: &[Transaction]) -> Vec<HistoryRow> {
    transactions
        .iter()
        .map(|tx| HistoryRow {
            tx_id: tx.id.clone(),
            label: tx.kind.label().to_string(),
            route: route(tx),
            amount: format!(
                "{} {}",
                format_token_amount(tx.amount, 6),
                tx.token_symbol
            ),
            status: status_label(tx.status).to_string(),
            hash: tx.tx_hash.as_deref().map(format_tx_hash).unwrap_or_default(),
            age: format_time_ago(tx.timestamp),
            description: tx.description.clone(),
        })
        .collect()
}
