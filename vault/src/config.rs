//! # Application Configuration
//!
//! This module manages the vault configuration: the per-chain latency tables
//! driving the simulated lifecycles, the validation mode, and the
//! failure-injection rate. Configuration is validated on construction to fail
//! fast if misconfigured.
//!
//! The latency mapping is a configuration table, not business logic computed
//! from real network conditions: a slower, fee-heavy chain (Ethereum) simply
//! uses longer simulated delays than the others.
//!
//! ## Environment Variables
//!
//! - `VAULT_VALIDATION_MODE` - `strict` or `permissive` (default: `permissive`)
//! - `VAULT_FAILURE_RATE` - probability in `[0, 1]` that an accepted operation
//!   fails at a stage boundary (default: `0`)
//! - `VAULT_TIME_SCALE` - multiplier applied to every simulated delay
//!   (default: `1`)

use std::env;
use std::time::Duration;

use rand::Rng;

use crate::core::error::{Result, VaultError};
use crate::registry::ETHEREUM;

/// Nominal confirmation delay for Ethereum-class chains, in milliseconds.
const SLOW_CONFIRMATION_MS: u64 = 15_000;
/// Nominal confirmation delay for every other chain, in milliseconds.
const FAST_CONFIRMATION_MS: u64 = 5_000;

/// Nominal total transfer duration when the source chain is Ethereum.
const SLOW_TRANSFER_MS: u64 = 600_000;
/// Nominal total transfer duration for every other source chain.
const FAST_TRANSFER_MS: u64 = 300_000;

/// Delay before a transfer's source-chain confirmation (stage 1).
const TRANSFER_CONFIRM_MS: u64 = 3_000;
/// Delay between source confirmation and relay stamping (stage 2).
const RELAY_STAMP_MS: u64 = 3_000;

/// APY band assigned to freshly created positions, in percent.
const APY_MIN: f64 = 5.0;
const APY_MAX: f64 = 15.0;

/// Whether operation amounts are validated against available balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Withdrawals are bounded by the position balance; chains and tokens must
    /// be present in the registry.
    Strict,
    /// Any positive amount on a registered chain/token is accepted; balance
    /// checks are left to the presentation layer.
    PermissiveDemo,
}

/// Vault configuration: latency tables, validation mode, failure injection.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Amount validation policy.
    pub validation_mode: ValidationMode,

    /// Probability in `[0, 1]` that an accepted operation fails at a stage
    /// boundary. At `0` every accepted operation eventually completes.
    pub failure_rate: f64,

    /// Multiplier applied to every simulated delay. `1.0` uses the nominal
    /// wall-clock timings; the demo binary uses a small scale so a full
    /// scenario finishes in seconds.
    pub time_scale: f64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::PermissiveDemo,
            failure_rate: 0.0,
            time_scale: 1.0,
        }
    }
}

impl VaultConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let validation_mode = match env::var("VAULT_VALIDATION_MODE") {
            Ok(mode) => match mode.as_str() {
                "strict" => ValidationMode::Strict,
                "permissive" => ValidationMode::PermissiveDemo,
                other => {
                    return Err(VaultError::Config(format!(
                        "VAULT_VALIDATION_MODE must be 'strict' or 'permissive', got '{}'",
                        other
                    )))
                }
            },
            Err(_) => ValidationMode::PermissiveDemo,
        };

        let failure_rate = env::var("VAULT_FAILURE_RATE")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<f64>()
            .map_err(|e| VaultError::Config(format!("VAULT_FAILURE_RATE must be a number: {}", e)))?;

        let time_scale = env::var("VAULT_TIME_SCALE")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<f64>()
            .map_err(|e| VaultError::Config(format!("VAULT_TIME_SCALE must be a number: {}", e)))?;

        let config = Self {
            validation_mode,
            failure_rate,
            time_scale,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration used by the demo binary: permissive validation and a
    /// time scale that compresses the nominal minutes-long transfer into a
    /// few seconds.
    pub fn demo() -> Self {
        Self {
            time_scale: 0.01,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(VaultError::Config(
                "VAULT_FAILURE_RATE must be between 0 and 1".to_string(),
            ));
        }
        if !(self.time_scale > 0.0) || !self.time_scale.is_finite() {
            return Err(VaultError::Config(
                "VAULT_TIME_SCALE must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    /// Confirmation latency for deposits and withdrawals on `chain_id`.
    pub fn confirmation_delay(&self, chain_id: u64) -> Duration {
        let ms = if chain_id == ETHEREUM {
            SLOW_CONFIRMATION_MS
        } else {
            FAST_CONFIRMATION_MS
        };
        self.scaled(ms)
    }

    /// Nominal total duration of a cross-chain transfer, a static function of
    /// the source chain only. Unscaled; this is what transfer records carry.
    pub fn transfer_estimate_ms(&self, from_chain: u64) -> u64 {
        if from_chain == ETHEREUM {
            SLOW_TRANSFER_MS
        } else {
            FAST_TRANSFER_MS
        }
    }

    /// Scaled delay before a transfer's source-chain confirmation (stage 1).
    pub fn transfer_confirm_delay(&self) -> Duration {
        self.scaled(TRANSFER_CONFIRM_MS)
    }

    /// Scaled delay between source confirmation and relay stamping (stage 2).
    pub fn relay_delay(&self) -> Duration {
        self.scaled(RELAY_STAMP_MS)
    }

    /// Scaled remainder of the transfer after the first two stages (stage 3).
    pub fn finalize_delay(&self, from_chain: u64) -> Duration {
        let remainder = self
            .transfer_estimate_ms(from_chain)
            .saturating_sub(TRANSFER_CONFIRM_MS + RELAY_STAMP_MS);
        self.scaled(remainder)
    }

    /// Draw a fresh APY for a newly created position.
    pub fn random_apy(&self) -> f64 {
        rand::rng().random_range(APY_MIN..APY_MAX)
    }

    /// Roll the failure-injection dice for one stage boundary.
    pub fn roll_failure(&self) -> bool {
        self.failure_rate > 0.0 && rand::rng().random::<f64>() < self.failure_rate
    }

    fn scaled(&self, ms: u64) -> Duration {
        Duration::from_millis((ms as f64 * self.time_scale).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ETHEREUM, POLYGON};

    #[test]
    fn test_defaults_are_valid() {
        let config = VaultConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.validation_mode, ValidationMode::PermissiveDemo);
        assert_eq!(config.failure_rate, 0.0);
    }

    #[test]
    fn test_invalid_failure_rate_rejected() {
        let config = VaultConfig {
            failure_rate: 1.5,
            ..VaultConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ethereum_is_slower() {
        let config = VaultConfig::default();
        assert!(config.confirmation_delay(ETHEREUM) > config.confirmation_delay(POLYGON));
        assert!(config.transfer_estimate_ms(ETHEREUM) > config.transfer_estimate_ms(POLYGON));
    }

    #[test]
    fn test_time_scale_shrinks_delays() {
        let config = VaultConfig {
            time_scale: 0.001,
            ..VaultConfig::default()
        };
        assert_eq!(
            config.confirmation_delay(ETHEREUM),
            Duration::from_millis(15)
        );
    }

    #[test]
    fn test_random_apy_within_band() {
        let config = VaultConfig::default();
        for _ in 0..100 {
            let apy = config.random_apy();
            assert!((APY_MIN..APY_MAX).contains(&apy));
        }
    }

    #[test]
    fn test_zero_failure_rate_never_fails() {
        let config = VaultConfig::default();
        for _ in 0..100 {
            assert!(!config.roll_failure());
        }
    }
}
