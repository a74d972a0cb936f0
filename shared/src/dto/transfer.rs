//! Cross-chain transfer records.
//!
//! A transfer tracks the logical movement of value from a source chain to a
//! destination chain. It is linked to, but independent of, the per-chain
//! [`Transaction`](crate::dto::vault::Transaction) records: a completed
//! transfer has produced one send-side and one receive-side transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an in-flight or settled cross-chain transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl TransferStatus {
    /// Forward-progress rank used to enforce monotonic transitions.
    fn rank(&self) -> u8 {
        match self {
            TransferStatus::Pending => 0,
            TransferStatus::Processing => 1,
            TransferStatus::Completed => 2,
            // Failed is terminal regardless of the stage it was reached from
            TransferStatus::Failed => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Completed | TransferStatus::Failed)
    }
}

/// An in-flight movement of value between two chains.
///
/// Transfers are never deleted; a terminal status supersedes the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossChainTransfer {
    pub id: String,
    pub from_chain: u64,
    pub to_chain: u64,
    pub amount: f64,
    pub token_symbol: String,
    pub status: TransferStatus,
    pub timestamp: DateTime<Utc>,
    /// Nominal total duration of the transfer in milliseconds, a static
    /// function of the source chain only.
    pub estimated_duration_ms: u64,
    /// Source-chain transaction hash, assigned at initiation.
    pub tx_hash: String,
    /// Intermediate relay hash, attached while processing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_tx_hash: Option<String>,
    /// Destination-chain transaction hash, attached on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
}

impl CrossChainTransfer {
    /// Advance the transfer status. Transitions are monotonic: a transfer
    /// never moves backward and a terminal status is never left.
    ///
    /// Returns `true` if the transition was applied.
    pub fn advance(&mut self, next: TransferStatus) -> bool {
        if self.status.is_terminal() || next.rank() <= self.status.rank() {
            return false;
        }
        self.status = next;
        true
    }
}
