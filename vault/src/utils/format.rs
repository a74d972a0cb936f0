//! # Formatting Utilities
//!
//! Pure functions converting raw values into human-readable currency,
//! percentage, token-amount, hash, and relative-time representations. Used by
//! the view builders and the demo binary.
//!
//! For address formatting, use [`shared::utils::format_address`] or
//! [`shared::utils::truncate_address`].

use chrono::{DateTime, Utc};

/// Format a number with commas (e.g. 1234567.89 -> "1,234,567.89").
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let parts: Vec<&str> = unsigned.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let body = if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    };
    format!("{}{}", sign, body)
}

/// Format a USD amount: `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_number(amount, 2))
}

/// Format a large number with K/M/B suffixes.
pub fn format_large_number(num: f64) -> String {
    if num >= 1e9 {
        format!("{:.1}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.1}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.1}K", num / 1e3)
    } else {
        format!("{:.2}", num)
    }
}

/// Format a percentage; non-finite input renders as zero rather than NaN.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.prec$}%", value, prec = decimals)
}

/// Format a token amount for display, trimming trailing zeros.
pub fn format_token_amount(amount: f64, display_decimals: usize) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    if amount.abs() < 0.0001 {
        return "< 0.0001".to_string();
    }
    let formatted = format!("{:.prec$}", amount, prec = display_decimals);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Format a transaction hash with a wider prefix than addresses get.
pub fn format_tx_hash(hash: &str) -> String {
    shared::utils::format_address(hash, 8, 6)
}

/// Relative-time string for a past timestamp ("5 minutes ago").
pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(timestamp);
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    }

    if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        plural(seconds, "second")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(8550.0), "$8,550.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(2_500_000_000.0), "2.5B");
        assert_eq!(format_large_number(1_500_000.0), "1.5M");
        assert_eq!(format_large_number(12_300.0), "12.3K");
        assert_eq!(format_large_number(42.0), "42.00");
    }

    #[test]
    fn test_format_percentage_never_nan() {
        assert_eq!(format_percentage(10.25, 2), "10.25%");
        assert_eq!(format_percentage(f64::NAN, 2), "0.00%");
        assert_eq!(format_percentage(f64::INFINITY, 2), "0.00%");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(1.5, 4), "1.5");
        assert_eq!(format_token_amount(0.0, 4), "0");
        assert_eq!(format_token_amount(0.00001, 4), "< 0.0001");
        assert_eq!(format_token_amount(100.0, 4), "100");
    }

    #[test]
    fn test_format_tx_hash() {
        let hash = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        assert_eq!(format_tx_hash(hash), "0x123456...abcdef");
    }

    #[test]
    fn test_format_time_ago() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::days(2)), "2 days ago");
        assert_eq!(format_time_ago(now - Duration::hours(1)), "1 hour ago");
        assert_eq!(format_time_ago(now - Duration::minutes(5)), "5 minutes ago");
    }
}
