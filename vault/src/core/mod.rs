//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`VaultError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`WalletConnector`)
//!
//! All fallible operations in this crate return [`Result`], and synchronous
//! rejections (not-found, validation) happen before any state mutation or
//! timer is scheduled so callers can show immediate feedback.

pub mod error;
pub mod service;

pub use error::{Result, VaultError};
pub use service::WalletConnector;
