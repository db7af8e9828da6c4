//! Blockchain display priority.
//!
//! A fixed lookup table with an explicit default for anything not listed.
//! Higher ranks are shown first; the default rank marks a chain as unknown
//! and keeps its balances off the list.

/// Rank assigned to any blockchain not present in [`PRIORITY_TABLE`].
pub const UNKNOWN_PRIORITY: i32 = -99;

/// Known blockchains and their display rank.
pub const PRIORITY_TABLE: &[(&str, i32)] = &[
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];

/// Resolve the display priority of a blockchain identifier.
///
/// Matching is exact and case-sensitive. Total: every input maps to a rank.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(priority("Osmosis"), 100);
/// assert_eq!(priority("Solana"), UNKNOWN_PRIORITY);
/// ```
#[must_use]
pub fn priority(blockchain: &str) -> i32 {
    PRIORITY_TABLE
        .iter()
        .find(|(name, _)| *name == blockchain)
        .map_or(UNKNOWN_PRIORITY, |&(_, rank)| rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::osmosis("Osmosis", 100)]
    #[case::ethereum("Ethereum", 50)]
    #[case::arbitrum("Arbitrum", 30)]
    #[case::zilliqa("Zilliqa", 20)]
    #[case::neo("Neo", 20)]
    #[case::unknown("Solana", UNKNOWN_PRIORITY)]
    #[case::empty("", UNKNOWN_PRIORITY)]
    #[case::wrong_case("ethereum", UNKNOWN_PRIORITY)]
    fn test_priority(#[case] blockchain: &str, #[case] expected: i32) {
        assert_eq!(priority(blockchain), expected);
    }
}
