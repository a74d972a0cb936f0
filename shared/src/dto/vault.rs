//! # Vault Domain Types
//!
//! Positions, transaction records, and the derived statistics snapshot.
//!
//! ## Invariants
//!
//! - A [`Position`] balance is never negative; a position drained to zero is
//!   removed from the position set rather than kept around.
//! - A [`Transaction`] status only moves forward: `Pending` to `Completed` or
//!   `Failed`, never back. The transition methods on [`Transaction`] enforce
//!   this; callers cannot regress a finalized record.
//! - [`VaultStats`] is derived data. It is recomputed wholesale from the
//!   position set and never mutated independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Completed,
    Failed,
}

impl TxStatus {
    /// Whether the status is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStatus::Completed | TxStatus::Failed)
    }
}

/// Kind of a recorded transaction, with the fields specific to each kind.
///
/// Modeled as a tagged union rather than an open record with optional fields,
/// so each kind carries exactly the data that is meaningful for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    /// Deposit into the vault on a single chain.
    Deposit,
    /// Withdrawal from a position, optionally routed to another chain.
    Withdraw {
        #[serde(skip_serializing_if = "Option::is_none")]
        destination_chain: Option<u64>,
    },
    /// Source leg of a cross-chain transfer.
    CrossChainSend { to_chain: u64 },
    /// Destination leg of a cross-chain transfer.
    CrossChainReceive { from_chain: u64 },
    /// Yield accrual credited to a position.
    Yield,
}

impl TransactionKind {
    /// Short human-readable label for history views.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw { .. } => "Withdraw",
            TransactionKind::CrossChainSend { .. } => "Cross-Chain Send",
            TransactionKind::CrossChainReceive { .. } => "Cross-Chain Receive",
            TransactionKind::Yield => "Yield",
        }
    }
}

/// An append-only record of a user-initiated or system-generated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub token_symbol: String,
    /// Chain the event happened on (source chain for sends).
    pub chain_id: u64,
    pub status: TxStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub description: String,
}

impl Transaction {
    /// Mark the transaction completed. No-op unless currently pending.
    ///
    /// Returns `true` if the transition happened.
    pub fn complete(&mut self) -> bool {
        if self.status == TxStatus::Pending {
            self.status = TxStatus::Completed;
            true
        } else {
            false
        }
    }

    /// Mark the transaction failed. No-op unless currently pending.
    ///
    /// Returns `true` if the transition happened.
    pub fn fail(&mut self) -> bool {
        if self.status == TxStatus::Pending {
            self.status = TxStatus::Failed;
            true
        } else {
            false
        }
    }
}

/// A user's deposited balance of one token on one chain.
///
/// At most one position exists per `(chain_id, token_symbol)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub chain_id: u64,
    pub token_symbol: String,
    pub balance: f64,
    /// Annualized yield rate in percent.
    pub apy: f64,
    pub yield_earned: f64,
    pub last_updated: DateTime<Utc>,
}

/// Derived aggregate figures over the current position set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultStats {
    pub total_balance: f64,
    pub total_yield_earned: f64,
    /// Average APY across positions, 0 when there are no positions.
    pub average_apy: f64,
    /// Estimated yield over one month at the current average rate.
    pub monthly_yield_estimate: f64,
    pub positions_count: usize,
}

impl Default for VaultStats {
    fn default() -> Self {
        Self {
            total_balance: 0.0,
            total_yield_earned: 0.0,
            average_apy: 0.0,
            monthly_yield_estimate: 0.0,
            positions_count: 0,
        }
    }
}
