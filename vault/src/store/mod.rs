//! # Vault State Store
//!
//! The single authoritative in-memory owner of positions, transaction history,
//! cross-chain transfers, and derived statistics. Only this module mutates
//! them; every other component reads snapshots.
//!
//! ## Design
//!
//! - **Constructible, not global**: a [`VaultStore`] is created once at
//!   application start and handed to consumers by clone (all clones share the
//!   same state). Tests construct isolated instances.
//! - **Single-writer discipline**: every mutation takes the store's write
//!   lock, so overlapping operations never interleave partial mutations, even
//!   on a multi-threaded runtime.
//! - **Staged lifecycles**: each operation validates synchronously, records a
//!   `pending` transaction, returns immediately, and spawns one background
//!   task whose stages are sequentially awaited. A stage can never fire
//!   before its predecessor's mutation is visible.
//! - **Observable**: subscribers receive a [`VaultEvent`] for every mutation.
//!
//! ## Lifecycles
//!
//! ```text
//! Transaction:  pending ──confirm──▶ completed | failed
//! Transfer:     pending ──confirm──▶ processing ──relay-stamp──▶ processing
//!                                                 ──finalize──▶ completed
//!               (or ──▶ failed at any stage, with failure injection enabled)
//! ```
//!
//! No retries, no cancellation: once accepted, an operation always reaches a
//! terminal status.

pub mod events;
pub mod stats;
pub mod tasks;

use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use shared::dto::transfer::{CrossChainTransfer, TransferStatus};
use shared::dto::vault::{Position, Transaction, TransactionKind, TxStatus, VaultStats};
use tracing::{info, warn};

use crate::config::{ValidationMode, VaultConfig};
use crate::core::error::{Result, VaultError};
use crate::registry::{chain_by_id, chains::chain_name, token_supported};
use crate::utils::ids::{mock_tx_hash, new_id};
use crate::utils::validation::validate_amount;

pub use events::VaultEvent;

/// Identifiers returned to the caller when a deposit is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositReceipt {
    /// The position the deposit will credit once confirmed: the existing
    /// position for the (chain, token) pair, or the id the new position will
    /// be created under.
    pub position_id: String,
    /// Simulated source-chain transaction hash.
    pub tx_hash: String,
}

/// All mutable vault state, guarded by the store's single write lock.
#[derive(Debug, Default)]
struct VaultState {
    /// At most one position per (chain, token) pair.
    positions: Vec<Position>,
    /// Append-only history, newest first.
    transactions: Vec<Transaction>,
    /// Transfer records, newest first; kept after reaching a terminal status.
    transfers: Vec<CrossChainTransfer>,
    /// Derived; recomputed after every position mutation.
    stats: VaultStats,
}

/// Observable in-memory vault state container.
///
/// Cloning is cheap and every clone shares the same underlying state.
#[derive(Clone)]
pub struct VaultStore {
    inner: Arc<RwLock<VaultState>>,
    config: Arc<VaultConfig>,
    subscribers: Arc<Mutex<Vec<async_channel::Sender<VaultEvent>>>>,
}

impl VaultStore {
    pub fn new(config: VaultConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VaultState::default())),
            config: Arc::new(config),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    // ---- Snapshot accessors -------------------------------------------------

    /// Current positions, in insertion order.
    pub fn positions(&self) -> Vec<Position> {
        self.inner.read().positions.clone()
    }

    /// Transaction history, newest first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.inner.read().transactions.clone()
    }

    /// Cross-chain transfer records, newest first.
    pub fn transfers(&self) -> Vec<CrossChainTransfer> {
        self.inner.read().transfers.clone()
    }

    /// Current statistics snapshot.
    pub fn stats(&self) -> VaultStats {
        self.inner.read().stats.clone()
    }

    /// Look up a single position by id.
    pub fn position(&self, position_id: &str) -> Option<Position> {
        self.inner
            .read()
            .positions
            .iter()
            .find(|p| p.id == position_id)
            .cloned()
    }

    // ---- Subscription -------------------------------------------------------

    /// Subscribe to state mutations. Every event is delivered to every live
    /// subscriber; dropped receivers are pruned on the next emit.
    pub fn subscribe(&self) -> async_channel::Receiver<VaultEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    pub(crate) fn emit(&self, event: VaultEvent) {
        self.subscribers
            .lock()
            .retain(|sender| sender.try_send(event.clone()).is_ok());
    }

    // ---- Operations ---------------------------------------------------------

    /// Deposit `amount` of `token_symbol` into the vault on `chain_id`.
    ///
    /// Validates synchronously and records a `pending` transaction; the
    /// confirmation happens after the per-chain latency in a background task.
    /// Returns the position id the deposit will credit plus the simulated
    /// transaction hash.
    pub fn deposit(
        &self,
        chain_id: u64,
        token_symbol: &str,
        amount: f64,
        user_address: &str,
    ) -> Result<DepositReceipt> {
        self.check_amount(amount)?;
        self.check_chain_token(chain_id, token_symbol)?;

        let tx_hash = mock_tx_hash();
        let tx = Transaction {
            id: new_id("tx"),
            kind: TransactionKind::Deposit,
            amount,
            token_symbol: token_symbol.to_string(),
            chain_id,
            status: TxStatus::Pending,
            timestamp: Utc::now(),
            tx_hash: Some(tx_hash.clone()),
            fee: None,
            description: format!("Deposit to {} vault", chain_name(chain_id)),
        };

        let position_id = {
            let mut state = self.inner.write();
            let position_id = state
                .positions
                .iter()
                .find(|p| p.chain_id == chain_id && p.token_symbol == token_symbol)
                .map(|p| p.id.clone())
                .unwrap_or_else(|| new_id("pos"));
            state.transactions.insert(0, tx.clone());
            position_id
        };

        info!(
            user = %user_address,
            chain_id,
            token = %token_symbol,
            amount,
            tx_id = %tx.id,
            "deposit accepted"
        );
        self.emit(VaultEvent::TransactionAdded(tx.clone()));

        let store = self.clone();
        let tx_id = tx.id;
        let credit_position = position_id.clone();
        let token = token_symbol.to_string();
        tokio::spawn(async move {
            tasks::deposit::run(store, tx_id, credit_position, chain_id, token, amount).await;
        });

        Ok(DepositReceipt {
            position_id,
            tx_hash,
        })
    }

    /// Withdraw `amount` from the position `position_id`, optionally routing
    /// the value to `destination_chain` via a cross-chain transfer.
    ///
    /// Rejects synchronously with [`VaultError::NotFound`] when the position
    /// does not exist; no transaction is recorded in that case.
    pub fn withdraw(
        &self,
        position_id: &str,
        amount: f64,
        destination_chain: Option<u64>,
        user_address: &str,
    ) -> Result<String> {
        self.check_amount(amount)?;
        if let Some(dest) = destination_chain {
            if chain_by_id(dest).is_none() {
                return Err(VaultError::UnsupportedChain(dest));
            }
        }

        let position = self
            .position(position_id)
            .ok_or_else(|| VaultError::NotFound(format!("position {}", position_id)))?;

        if self.config.validation_mode == ValidationMode::Strict && amount > position.balance {
            return Err(VaultError::Validation(format!(
                "Amount {} exceeds position balance {}",
                amount, position.balance
            )));
        }

        let cross_chain = destination_chain.filter(|dest| *dest != position.chain_id);
        let description = match cross_chain {
            Some(dest) => format!("Withdraw and transfer to {}", chain_name(dest)),
            None => format!("Withdraw from {} vault", chain_name(position.chain_id)),
        };

        let tx_hash = mock_tx_hash();
        let tx = Transaction {
            id: new_id("tx"),
            kind: TransactionKind::Withdraw { destination_chain },
            amount,
            token_symbol: position.token_symbol.clone(),
            chain_id: position.chain_id,
            status: TxStatus::Pending,
            timestamp: Utc::now(),
            tx_hash: Some(tx_hash.clone()),
            fee: None,
            description,
        };

        self.inner.write().transactions.insert(0, tx.clone());
        info!(
            user = %user_address,
            position_id,
            amount,
            destination = ?cross_chain,
            tx_id = %tx.id,
            "withdrawal accepted"
        );
        self.emit(VaultEvent::TransactionAdded(tx.clone()));

        let store = self.clone();
        let tx_id = tx.id;
        let position_id = position_id.to_string();
        let source_chain = position.chain_id;
        tokio::spawn(async move {
            tasks::withdraw::run(store, tx_id, position_id, source_chain, amount, cross_chain)
                .await;
        });

        Ok(tx_hash)
    }

    /// Initiate a cross-chain transfer of `amount` of `token_symbol` from
    /// `from_chain` to `to_chain`.
    ///
    /// This is the sub-protocol used by cross-chain withdrawals and is also
    /// directly invocable. It credits the destination position on completion;
    /// debiting the source is the initiating operation's responsibility.
    ///
    /// A token absent from the source chain's registry is still transferable
    /// when a position holds it there (bridged assets land outside the static
    /// tables); an existing position is proof the token lives on that chain.
    pub fn transfer(
        &self,
        from_chain: u64,
        to_chain: u64,
        token_symbol: &str,
        amount: f64,
    ) -> Result<String> {
        self.check_amount(amount)?;
        if chain_by_id(from_chain).is_none() {
            return Err(VaultError::UnsupportedChain(from_chain));
        }
        if !token_supported(from_chain, token_symbol) && !self.holds_token(from_chain, token_symbol)
        {
            return Err(VaultError::UnsupportedToken {
                chain_id: from_chain,
                symbol: token_symbol.to_string(),
            });
        }
        if chain_by_id(to_chain).is_none() {
            return Err(VaultError::UnsupportedChain(to_chain));
        }
        if from_chain == to_chain {
            return Err(VaultError::Validation(
                "Source and destination chains must differ".to_string(),
            ));
        }

        Ok(self.start_transfer(from_chain, to_chain, token_symbol, amount))
    }

    /// Record a transfer and spawn its lifecycle task.
    ///
    /// Callers must have validated the route already: cross-chain withdrawals
    /// validate it synchronously at acceptance, so the follow-up transfer can
    /// start unconditionally even after the source position was removed.
    pub(crate) fn start_transfer(
        &self,
        from_chain: u64,
        to_chain: u64,
        token_symbol: &str,
        amount: f64,
    ) -> String {
        let source_hash = mock_tx_hash();
        let transfer = CrossChainTransfer {
            id: new_id("xfer"),
            from_chain,
            to_chain,
            amount,
            token_symbol: token_symbol.to_string(),
            status: TransferStatus::Pending,
            timestamp: Utc::now(),
            estimated_duration_ms: self.config.transfer_estimate_ms(from_chain),
            tx_hash: source_hash.clone(),
            relay_tx_hash: None,
            destination_tx_hash: None,
            fee: None,
        };

        let send_tx = Transaction {
            id: new_id("tx"),
            kind: TransactionKind::CrossChainSend { to_chain },
            amount,
            token_symbol: token_symbol.to_string(),
            chain_id: from_chain,
            status: TxStatus::Pending,
            timestamp: Utc::now(),
            tx_hash: Some(source_hash),
            fee: None,
            description: format!("Cross-chain transfer to {}", chain_name(to_chain)),
        };

        {
            let mut state = self.inner.write();
            state.transfers.insert(0, transfer.clone());
            state.transactions.insert(0, send_tx.clone());
        }

        info!(
            from_chain,
            to_chain,
            token = %token_symbol,
            amount,
            transfer_id = %transfer.id,
            "cross-chain transfer initiated"
        );
        self.emit(VaultEvent::TransferUpdated(transfer.clone()));
        self.emit(VaultEvent::TransactionAdded(send_tx.clone()));

        let store = self.clone();
        let transfer_id = transfer.id.clone();
        let send_tx_id = send_tx.id;
        let token = token_symbol.to_string();
        tokio::spawn(async move {
            tasks::transfer::run(
                store,
                transfer_id,
                send_tx_id,
                from_chain,
                to_chain,
                token,
                amount,
            )
            .await;
        });

        transfer.id
    }

    /// Apply one accrual step of yield to every position.
    ///
    /// Credits each position's `yield_earned` with one day's worth of its APY
    /// and records a completed `Yield` transaction per position. Synchronous;
    /// returns the number of positions credited.
    pub fn accrue_yield(&self) -> usize {
        let (yield_txs, stats) = {
            let mut state = self.inner.write();
            let now = Utc::now();
            let mut yield_txs = Vec::new();

            for position in &mut state.positions {
                let earned = position.balance * (position.apy / 100.0) / 365.0;
                if earned <= 0.0 {
                    continue;
                }
                position.yield_earned += earned;
                position.last_updated = now;

                yield_txs.push(Transaction {
                    id: new_id("tx"),
                    kind: TransactionKind::Yield,
                    amount: earned,
                    token_symbol: position.token_symbol.clone(),
                    chain_id: position.chain_id,
                    status: TxStatus::Completed,
                    timestamp: now,
                    tx_hash: None,
                    fee: None,
                    description: format!(
                        "Yield accrued on {} {} position",
                        chain_name(position.chain_id),
                        position.token_symbol
                    ),
                });
            }

            for tx in yield_txs.iter().rev() {
                state.transactions.insert(0, tx.clone());
            }
            state.stats = stats::recompute(&state.positions);
            (yield_txs, state.stats.clone())
        };

        if yield_txs.is_empty() {
            return 0;
        }

        let credited = yield_txs.len();
        for tx in yield_txs {
            self.emit(VaultEvent::TransactionAdded(tx));
        }
        self.emit(VaultEvent::PositionsChanged);
        self.emit(VaultEvent::StatsUpdated(stats));
        info!(credited, "yield accrued");
        credited
    }

    // ---- Validation helpers -------------------------------------------------

    fn check_amount(&self, amount: f64) -> Result<()> {
        let result = validate_amount(amount);
        if !result.is_valid {
            return Err(VaultError::Validation(
                result.error.unwrap_or_else(|| "Invalid amount".to_string()),
            ));
        }
        Ok(())
    }

    /// Whether any current position holds `token_symbol` on `chain_id`.
    fn holds_token(&self, chain_id: u64, token_symbol: &str) -> bool {
        self.inner
            .read()
            .positions
            .iter()
            .any(|p| p.chain_id == chain_id && p.token_symbol == token_symbol)
    }

    fn check_chain_token(&self, chain_id: u64, token_symbol: &str) -> Result<()> {
        if chain_by_id(chain_id).is_none() {
            return Err(VaultError::UnsupportedChain(chain_id));
        }
        if !token_supported(chain_id, token_symbol) {
            return Err(VaultError::UnsupportedToken {
                chain_id,
                symbol: token_symbol.to_string(),
            });
        }
        Ok(())
    }

    // ---- Internal mutation helpers (used by lifecycle tasks) ----------------

    /// Move a pending transaction to a terminal status and notify subscribers.
    pub(crate) fn finalize_transaction(&self, tx_id: &str, success: bool) {
        let updated = {
            let mut state = self.inner.write();
            state
                .transactions
                .iter_mut()
                .find(|tx| tx.id == tx_id)
                .and_then(|tx| {
                    let transitioned = if success { tx.complete() } else { tx.fail() };
                    transitioned.then(|| tx.clone())
                })
        };
        match updated {
            Some(tx) => self.emit(VaultEvent::TransactionUpdated(tx)),
            None => warn!(tx_id, "finalize on unknown or already-final transaction"),
        }
    }

    /// Mark a transfer failed and notify subscribers.
    pub(crate) fn fail_transfer(&self, transfer_id: &str) {
        let updated = {
            let mut state = self.inner.write();
            state
                .transfers
                .iter_mut()
                .find(|t| t.id == transfer_id)
                .and_then(|t| t.advance(TransferStatus::Failed).then(|| t.clone()))
        };
        if let Some(transfer) = updated {
            warn!(transfer_id = %transfer.id, "cross-chain transfer failed");
            self.emit(VaultEvent::TransferUpdated(transfer));
        }
    }

    /// Create or increment the position for a (chain, token) pair.
    ///
    /// Must be called with the write lock already held by the caller's state
    /// block; takes the state to make that explicit.
    fn upsert_position(
        state: &mut VaultState,
        config: &VaultConfig,
        preferred_id: Option<String>,
        chain_id: u64,
        token_symbol: &str,
        amount: f64,
    ) {
        let now = Utc::now();
        match state
            .positions
            .iter_mut()
            .find(|p| p.chain_id == chain_id && p.token_symbol == token_symbol)
        {
            Some(position) => {
                position.balance += amount;
                position.last_updated = now;
            }
            None => {
                state.positions.push(Position {
                    id: preferred_id.unwrap_or_else(|| new_id("pos")),
                    chain_id,
                    token_symbol: token_symbol.to_string(),
                    balance: amount,
                    apy: config.random_apy(),
                    yield_earned: 0.0,
                    last_updated: now,
                });
            }
        }
    }

    /// Confirm a deposit: upsert the position, complete the transaction,
    /// recompute statistics, notify.
    pub(crate) fn confirm_deposit(
        &self,
        tx_id: &str,
        position_id: String,
        chain_id: u64,
        token_symbol: &str,
        amount: f64,
    ) {
        let (updated_tx, stats) = {
            let mut state = self.inner.write();
            Self::upsert_position(
                &mut state,
                &self.config,
                Some(position_id),
                chain_id,
                token_symbol,
                amount,
            );
            let updated_tx = state
                .transactions
                .iter_mut()
                .find(|tx| tx.id == tx_id)
                .and_then(|tx| tx.complete().then(|| tx.clone()));
            state.stats = stats::recompute(&state.positions);
            (updated_tx, state.stats.clone())
        };

        if let Some(tx) = updated_tx {
            self.emit(VaultEvent::TransactionUpdated(tx));
        }
        self.emit(VaultEvent::PositionsChanged);
        self.emit(VaultEvent::StatsUpdated(stats));
    }

    /// Confirm a withdrawal: decrement or remove the position, complete the
    /// transaction, recompute statistics, notify.
    ///
    /// Returns `false` when the position vanished between acceptance and
    /// confirmation (a concurrent full withdrawal); the transaction is marked
    /// failed in that case.
    pub(crate) fn confirm_withdrawal(&self, tx_id: &str, position_id: &str, amount: f64) -> bool {
        let outcome = {
            let mut state = self.inner.write();
            let index = state.positions.iter().position(|p| p.id == position_id);
            let found = match index {
                Some(index) => {
                    if amount >= state.positions[index].balance {
                        state.positions.remove(index);
                    } else {
                        let position = &mut state.positions[index];
                        position.balance -= amount;
                        position.last_updated = Utc::now();
                    }
                    true
                }
                None => false,
            };
            let updated_tx = state
                .transactions
                .iter_mut()
                .find(|tx| tx.id == tx_id)
                .and_then(|tx| {
                    let transitioned = if found { tx.complete() } else { tx.fail() };
                    transitioned.then(|| tx.clone())
                });
            if found {
                state.stats = stats::recompute(&state.positions);
            }
            (found, updated_tx, state.stats.clone())
        };

        let (found, updated_tx, stats) = outcome;
        if let Some(tx) = updated_tx {
            self.emit(VaultEvent::TransactionUpdated(tx));
        }
        if found {
            self.emit(VaultEvent::PositionsChanged);
            self.emit(VaultEvent::StatsUpdated(stats));
        } else {
            warn!(position_id, "position gone before withdrawal confirmation");
        }
        found
    }

    /// Finalize a transfer: record the completed receive leg, credit the
    /// destination position, complete the transfer, recompute statistics.
    pub(crate) fn finalize_transfer(
        &self,
        transfer_id: &str,
        from_chain: u64,
        to_chain: u64,
        token_symbol: &str,
        amount: f64,
    ) {
        let destination_hash = mock_tx_hash();
        let receive_tx = Transaction {
            id: new_id("tx"),
            kind: TransactionKind::CrossChainReceive { from_chain },
            amount,
            token_symbol: token_symbol.to_string(),
            chain_id: to_chain,
            status: TxStatus::Completed,
            timestamp: Utc::now(),
            tx_hash: Some(destination_hash.clone()),
            fee: None,
            description: format!("Received from {}", chain_name(from_chain)),
        };

        let (updated_transfer, stats) = {
            let mut state = self.inner.write();
            state.transactions.insert(0, receive_tx.clone());
            Self::upsert_position(&mut state, &self.config, None, to_chain, token_symbol, amount);
            let updated_transfer = state
                .transfers
                .iter_mut()
                .find(|t| t.id == transfer_id)
                .and_then(|t| {
                    t.advance(TransferStatus::Completed).then(|| {
                        t.destination_tx_hash = Some(destination_hash.clone());
                        t.clone()
                    })
                });
            state.stats = stats::recompute(&state.positions);
            (updated_transfer, state.stats.clone())
        };

        self.emit(VaultEvent::TransactionAdded(receive_tx));
        if let Some(transfer) = updated_transfer {
            info!(transfer_id = %transfer.id, "cross-chain transfer completed");
            self.emit(VaultEvent::TransferUpdated(transfer));
        }
        self.emit(VaultEvent::PositionsChanged);
        self.emit(VaultEvent::StatsUpdated(stats));
    }

    /// Advance a transfer to `processing` and complete its send leg (stage 1).
    pub(crate) fn confirm_transfer_send(&self, transfer_id: &str, send_tx_id: &str) {
        let (updated_tx, updated_transfer) = {
            let mut state = self.inner.write();
            let updated_tx = state
                .transactions
                .iter_mut()
                .find(|tx| tx.id == send_tx_id)
                .and_then(|tx| tx.complete().then(|| tx.clone()));
            let updated_transfer = state
                .transfers
                .iter_mut()
                .find(|t| t.id == transfer_id)
                .and_then(|t| t.advance(TransferStatus::Processing).then(|| t.clone()));
            (updated_tx, updated_transfer)
        };
        if let Some(tx) = updated_tx {
            self.emit(VaultEvent::TransactionUpdated(tx));
        }
        if let Some(transfer) = updated_transfer {
            self.emit(VaultEvent::TransferUpdated(transfer));
        }
    }

    /// Attach the intermediate relay hash to a processing transfer (stage 2).
    pub(crate) fn stamp_transfer_relay(&self, transfer_id: &str) {
        let updated = {
            let mut state = self.inner.write();
            state
                .transfers
                .iter_mut()
                .find(|t| t.id == transfer_id && t.status == TransferStatus::Processing)
                .map(|t| {
                    t.relay_tx_hash = Some(mock_tx_hash());
                    t.clone()
                })
        };
        if let Some(transfer) = updated {
            self.emit(VaultEvent::TransferUpdated(transfer));
        }
    }
}
