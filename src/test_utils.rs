//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of building balances and price tables by hand
//! in every test module.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::{DisplayRow, PriceTable, WalletBalance};
use crate::pipeline::build;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct BalanceMother;

impl BalanceMother {
    /// BTC on Ethereum, ATOM on Osmosis and FOO on an unranked chain.
    #[must_use]
    pub fn worked_example() -> Vec<WalletBalance> {
        vec![
            WalletBalance::new("BTC", -5.0, "Ethereum"),
            WalletBalance::new("ATOM", -2.0, "Osmosis"),
            WalletBalance::new("FOO", -1.0, "Unknown"),
        ]
    }

    /// Deterministic pseudo-random balances spread over known and unknown
    /// chains with both signs of amount.
    #[must_use]
    pub fn generated(seed: u64, count: usize) -> Vec<WalletBalance> {
        const CHAINS: [&str; 7] = [
            "Osmosis", "Ethereum", "Arbitrum", "Zilliqa", "Neo", "Solana", "Unknown",
        ];
        const CURRENCIES: [&str; 5] = ["BTC", "ETH", "ATOM", "USDC", "ZIL"];

        let mut rng = Lcg(seed.wrapping_mul(2_654_435_761).wrapping_add(1));
        (0..count)
            .map(|_| {
                let chain = CHAINS[rng.below(CHAINS.len())];
                let currency = CURRENCIES[rng.below(CURRENCIES.len())];
                let amount = (rng.below(2001) as f64 - 1000.0) / 7.0;
                WalletBalance::new(currency, amount, chain)
            })
            .collect()
    }
}

pub struct PriceMother;

impl PriceMother {
    #[must_use]
    pub fn btc_atom() -> PriceTable {
        PriceTable::new().with_price("BTC", 1.0).with_price("ATOM", 2.0)
    }

    /// Prices for a seed-dependent subset of the generated currencies.
    #[must_use]
    pub fn generated(seed: u64) -> PriceTable {
        let mut rng = Lcg(seed.wrapping_add(7));
        let mut table = PriceTable::new();
        for currency in ["BTC", "ETH", "ATOM", "USDC", "ZIL"] {
            if rng.below(4) != 0 {
                table = table.with_price(currency, rng.below(50_000) as f64 / 100.0);
            }
        }
        table
    }
}

pub struct RowMother;

impl RowMother {
    /// Rows for the worked example priced with [`PriceMother::btc_atom`].
    #[must_use]
    pub fn worked_example() -> Vec<DisplayRow> {
        build(&BalanceMother::worked_example(), &PriceMother::btc_atom())
    }
}

struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

// ============================================================================
// Files
// ============================================================================

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Writes `content` to a uniquely named file in the system temp directory.
#[must_use]
pub fn temp_file(stem: &str, content: &str) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "walletview-{stem}-{}-{n}.json",
        std::process::id()
    ));
    std::fs::write(&path, content).expect("temp file should be writable");
    path
}

// ============================================================================
// Rendering
// ============================================================================

/// Flattens a buffer into one string per row, joined by newlines.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}
