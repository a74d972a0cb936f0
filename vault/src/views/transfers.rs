//! Cross-chain transfer view models.

use chrono::{DateTime, Utc};
use shared::dto::transfer::{CrossChainTransfer, TransferStatus};

use crate::registry::chains::chain_name;
use crate::utils::format::{format_token_amount, format_tx_hash};

/// One in-flight or settled transfer, formatted for a progress list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRow {
    pub transfer_id: String,
    pub route: String,
    pub amount: String,
    pub status: String,
    /// Completion fraction in `[0, 1]` for progress bars.
    pub progress: f64,
    pub source_hash: String,
    pub relay_hash: Option<String>,
    pub destination_hash: Option<String>,
}

fn status_label(status: TransferStatus) -> &'static str {
    match status {
        TransferStatus::Pending => "Pending",
        TransferStatus::Processing => "Processing",
        TransferStatus::Completed => "Completed",
        TransferStatus::Failed => "Failed",
    }
}

/// Completion fraction for a transfer at `now`.
///
/// Terminal transfers report `1.0`; in-flight ones report elapsed time against
/// the nominal estimate, capped below `1.0` so a bar never looks finished
/// before the record says so.
pub fn progress(transfer: &CrossChainTransfer, now: DateTime<Utc>) -> f64 {
    if transfer.status.is_terminal() {
        return 1.0;
    }
    if transfer.estimated_duration_ms == 0 {
        return 0.0;
    }
    let elapsed_ms = now
        .signed_duration_since(transfer.timestamp)
        .num_milliseconds()
        .max(0) as f64;
    (elapsed_ms / transfer.estimated_duration_ms as f64).min(0.95)
}

pub fn transfer_rows(transfers: &[CrossChainTransfer]) -> Vec<TransferRow> {
    let now = Utc::now();
    transfers
        .iter()
        .map(|transfer| TransferRow {
            transfer_id: transfer.id.clone(),
            route: format!(
                "{} -> {}",
                chain_name(transfer.from_chain),
                chain_name(transfer.to_chain)
            ),
            amount: format!(
                "{} {}",
                format_token_amount(transfer.amount, 6),
                transfer.token_symbol
            ),
            status: status_label(transfer.status).to_string(),
            progress: progress(transfer, now),
            source_hash: format_tx_hash(&transfer.tx_hash),
            relay_hash: transfer.relay_tx_hash.as_deref().map(format_tx_hash),
            destination_hash: transfer.destination_tx_hash.as_deref().map(format_tx_hash),
        })
        .collect()
}
