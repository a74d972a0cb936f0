//! # ZetaVault - Library Root
//!
//! A client-side simulation of a **cross-chain DeFi vault**. Deposits,
//! withdrawals, and cross-chain transfers progress through staged asynchronous
//! lifecycles on a tokio runtime; all chain interaction beyond the mock wallet
//! is simulated with timers and random values.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   vault (this crate)                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  views      - view-model builders for presentation       │
//! │  store      - observable vault state + lifecycles (CORE) │
//! │  services   - mock wallet connector                      │
//! │  registry   - static chain/token tables                  │
//! │  config     - latency tables, validation, failure rate   │
//! │  core       - errors and service traits                  │
//! │  utils      - formatting and input validation            │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            │ domain types
//!                            ▼
//!                    ┌───────────────┐
//!                    │    shared     │
//!                    └───────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **store**: The single authoritative owner of positions, transaction
//!   history, transfers, and derived statistics. Operations validate
//!   synchronously, record a pending transaction, and spawn a background task
//!   whose stages are sequentially awaited.
//! - **services**: The mock wallet connector. The store treats it as an opaque
//!   source of "current user address" and "current chain"; pages call it
//!   directly.
//! - **registry**: Read-only chain and token lookup tables, initialized once.
//! - **views**: Pure functions turning state snapshots into display rows.
//!   No rendering lives in this crate.
//!
//! ## Concurrency Model
//!
//! All mutations go through the store's single write lock, and every staged
//! transition is an awaited sleep inside one task per operation. Stage N+1 can
//! never observe state from before stage N, and overlapping operations never
//! interleave partial mutations.

pub mod config;
pub mod core;
pub mod registry;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;
