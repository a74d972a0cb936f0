//! # View Models
//!
//! Pure functions turning state snapshots into display-ready rows: formatted
//! strings, labels, progress fractions. No rendering and no store access here;
//! callers fetch snapshots and pass them in, so each builder is trivially
//! testable.

pub mod dashboard;
pub mod history;
pub mod transfers;

pub use dashboard::{position_rows, stats_summary, PositionRow, StatsSummary};
pub use history::{history_rows, HistoryRow};
pub use transfers::{transfer_rows, TransferRow};
