//! Helper functions for formatting wallet values for display.

// ============================================================================
// Constants
// ============================================================================

/// Shown in place of a USD value that could not be computed.
pub const UNKNOWN_USD: &str = "$ ?";

// ============================================================================
// Number Formatting
// ============================================================================

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(1000), "1,000");
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a USD value as dollars and cents.
///
/// `None` renders as [`UNKNOWN_USD`]. Values that round to zero cents
/// drop their sign.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_usd(Some(-1234.5)), "-$1,234.50");
/// assert_eq!(format_usd(None), "$ ?");
/// ```
#[must_use]
pub fn format_usd(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return UNKNOWN_USD.to_string();
    };

    let cents = (value.abs() * 100.0).round();
    let dollars = (cents / 100.0).trunc() as u64;
    let remainder = (cents % 100.0) as u64;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };

    format!("{sign}${}.{remainder:02}", format_with_commas(dollars))
}

/// Sum of all known USD values, or `None` when there are none.
#[must_use]
pub fn total_usd(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    values
        .into_iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

// ============================================================================
// Tests
// ============================================================================
