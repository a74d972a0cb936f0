//! Validation utilities for user input.

/// Outcome of validating one input field.
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a form amount string: parseable, finite, and positive.
pub fn validate_amount_str(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err("Amount is required");
    }

    let amount: f64 = match value.trim().parse() {
        Ok(v) => v,
        Err(_) => return ValidationResult::err("Amount must be a number"),
    };

    validate_amount(amount)
}

/// Validate a numeric amount: finite and positive.
pub fn validate_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() {
        return ValidationResult::err("Amount must be a finite number");
    }
    if amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than 0");
    }
    ValidationResult::ok()
}

/// Validate an EVM-style address: `0x` followed by 40 hex characters.
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    let hex = match address.strip_prefix("0x") {
        Some(hex) => hex,
        None => return ValidationResult::err("Address must start with 0x"),
    };

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return ValidationResult::err("Address must be 20 bytes of hex");
    }

    ValidationResult::ok()
}
