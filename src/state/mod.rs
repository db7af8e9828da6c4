//! State management for the walletview TUI.
//!
//! - [`WalletData`] - sources, snapshots and the derived rows
//! - [`WalletListState`] - keyed selection and scroll position
//! - [`AppConfig`] - persistent configuration
//! - [`AppPaths`] - config and log file locations

pub mod config;
pub mod data;
pub mod paths;

pub use config::AppConfig;
pub use data::WalletData;
pub use paths::AppPaths;

use std::time::{Duration, Instant};

use tracing::debug;

use crate::event::Action;
use crate::ui::PageProps;
use crate::widgets::WalletListState;

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
pub struct App {
    /// Wallet sources and derived rows.
    pub data: WalletData,
    /// Selection in the balance list.
    pub list: WalletListState,
    /// Attributes forwarded to the page container.
    pub props: PageProps,
    /// How often sources are polled.
    pub refresh_interval: Duration,
    /// Whether the application should exit.
    pub exit: bool,
    last_poll: Option<Instant>,
}

impl App {
    /// Creates the application state. Sources are read on the first tick.
    #[must_use]
    pub fn new(data: WalletData, props: PageProps, refresh_interval: Duration) -> Self {
        Self {
            data,
            list: WalletListState::new(),
            props,
            refresh_interval,
            exit: false,
            last_poll: None,
        }
    }

    /// Applies an action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.exit = true,
            Action::Refresh => self.force_reload(),
            Action::MoveSelectionUp => self.list.select_previous(self.data.rows()),
            Action::MoveSelectionDown => self.list.select_next(self.data.rows()),
            Action::Tick => self.poll_sources(Instant::now()),
        }
    }

    /// Re-reads sources if the refresh interval has elapsed since the last poll.
    fn poll_sources(&mut self, now: Instant) {
        let due = self
            .last_poll
            .is_none_or(|last| now.duration_since(last) >= self.refresh_interval);
        if due {
            self.last_poll = Some(now);
            self.reload();
        }
    }

    fn reload(&mut self) {
        if self.data.refresh() {
            debug!(
                rows = self.data.rows().len(),
                recomputations = self.data.recomputations(),
                "balance rows changed"
            );
        }
        self.list.sync(self.data.rows());
    }

    /// Reload triggered by the user: rebuilds rows even if no source changed.
    fn force_reload(&mut self) {
        self.data.invalidate();
        self.reload();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceTable, WalletBalance};
    use crate::source::StaticSource;
    use crate::test_utils::{BalanceMother, PriceMother};

    fn test_app() -> App {
        let data = WalletData::new(
            Box::new(StaticSource::<[WalletBalance]>::new(BalanceMother::worked_example())),
            Box::new(StaticSource::<PriceTable>::new(PriceMother::btc_atom())),
        );
        App::new(data, PageProps::default(), Duration::from_secs(60))
    }

    #[test]
    fn test_first_tick_loads_and_selects_first_row() {
        let mut app = test_app();
        app.update(Action::Tick);

        assert_eq!(app.data.rows().len(), 2);
        assert_eq!(app.list.selected_index(app.data.rows()), Some(0));
    }

    #[test]
    fn test_ticks_respect_refresh_interval() {
        let mut app = test_app();
        let start = Instant::now();
        app.poll_sources(start);
        app.poll_sources(start + Duration::from_secs(1));
        app.poll_sources(start + Duration::from_secs(61));

        assert_eq!(app.last_poll, Some(start + Duration::from_secs(61)));
        assert_eq!(app.data.recomputations(), 1, "static sources never change");
    }

    #[test]
    fn test_refresh_action_forces_rebuild() {
        let mut app = test_app();
        app.update(Action::Tick);
        app.update(Action::MoveSelectionDown);
        assert_eq!(app.data.recomputations(), 1);

        app.update(Action::Refresh);
        assert_eq!(app.data.recomputations(), 2);
        assert_eq!(
            app.list.selected_key().map(|k| k.as_str()),
            Some("BTC@Ethereum"),
            "selection survives the rebuild"
        );
    }

    #[test]
    fn test_navigation_and_quit() {
        let mut app = test_app();
        app.update(Action::Refresh);
        app.update(Action::MoveSelectionDown);
        assert_eq!(
            app.list.selected_key().map(|k| k.as_str()),
            Some("BTC@Ethereum")
        );
        app.update(Action::MoveSelectionUp);
        assert_eq!(app.list.selected_index(app.data.rows()), Some(0));

        assert!(!app.exit);
        app.update(Action::Quit);
        assert!(app.exit);
    }
}
