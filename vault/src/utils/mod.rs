//! Utility functions: record identifiers, display formatting, input validation.

pub mod format;
pub mod ids;
pub mod validation;
