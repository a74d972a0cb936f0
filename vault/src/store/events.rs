//! # Store Events
//!
//! Event types emitted by the vault store on every state mutation, so
//! presentation layers re-render without polling.

use shared::dto::transfer::CrossChainTransfer;
use shared::dto::vault::{Transaction, VaultStats};

/// Notification sent to subscribers when vault state changes.
///
/// Events carry snapshots of the record that changed; subscribers never hold
/// references into the store.
#[derive(Debug, Clone)]
pub enum VaultEvent {
    /// A new transaction entered the history (always in `pending` status,
    /// except receive legs which are recorded already completed).
    TransactionAdded(Transaction),
    /// An existing transaction reached a terminal status.
    TransactionUpdated(Transaction),
    /// A cross-chain transfer was created or advanced a stage.
    TransferUpdated(CrossChainTransfer),
    /// The position set changed (created, mutated, or removed entries).
    PositionsChanged,
    /// Statistics were recomputed after a position mutation.
    StatsUpdated(VaultStats),
}
