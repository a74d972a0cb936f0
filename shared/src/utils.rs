//! # Shared Utility Functions
//!
//! Common utility functions used across the vault core and presentation layer.
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM-style wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x2791...4174");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
/// assert_eq!(format_address(addr, 6, 4), "0x2791...4174");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Return early if address is too short to truncate meaningfully
    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: we've verified prefix_len and suffix_len are within bounds
    // Hex addresses are ASCII-only, so byte indexing is safe
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix and 4-character suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=6`
/// and `suffix_len=4`, which keeps the `0x` prefix visible.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
/// assert_eq!(truncate_address(addr), "0x2791...4174");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
        assert_eq!(format_address(addr, 6, 4), "0x2791...4174");
        assert_eq!(format_address(addr, 8, 6), "0x2791Bc...a84174");
        assert_eq!(format_address(addr, 2, 2), "0x...74");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("abc", 6, 4), "abc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
        assert_eq!(truncate_address(addr), "0x2791...4174");
    }
}
