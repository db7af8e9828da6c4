use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Declare modules
mod constants;
mod domain;
mod event;
mod handler;
mod pipeline;
mod source;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    constants::TICK_RATE,
    event::Action,
    handler::handle_event,
    state::{App, AppConfig, AppPaths, WalletData},
    tui::Tui,
    ui::PageProps,
    widgets::{format_rows_plain, format_usd},
};

// walletview version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// walletview - wallet balances ranked by blockchain priority
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// JSON file with wallet balances (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    balances: Option<PathBuf>,

    /// JSON file with unit USD prices (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    prices: Option<PathBuf>,

    /// Source polling interval in milliseconds (overrides config)
    #[arg(long, value_name = "MS", global = true)]
    refresh_ms: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation reads the config file and writes the log.
    /// `version` never touches the config or data directories.
    fn uses_app_dirs(&self) -> bool {
        !matches!(self.command, Some(Commands::Version))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the balance rows once and exit
    Print,
    /// Display version
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !cli.uses_app_dirs() {
        println!("walletview v{VERSION}");
        return Ok(());
    }
    if let Err(err) = init_logging() {
        eprintln!("Logging disabled: {err}");
    }

    let config = AppConfig::load().with_overrides(cli.balances, cli.prices, cli.refresh_ms);
    let refresh_interval = config.refresh_interval()?;

    if matches!(cli.command, Some(Commands::Print)) {
        return print_rows(&config);
    }

    let data = WalletData::from_config(&config);
    let mut app = App::new(data, PageProps::from_config(&config), refresh_interval);

    info!(
        balances = ?config.balances_file,
        prices = ?config.prices_file,
        "starting walletview"
    );

    let mut terminal = tui::init()?;
    let result = run_app(&mut terminal, &mut app).await;
    tui::restore()?;
    result
}

/// Sends tracing output to the log file; the TUI owns stdout.
fn init_logging() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("{e}"))
}

/// Builds the rows once and prints them.
fn print_rows(config: &AppConfig) -> Result<()> {
    let mut data = WalletData::from_config(config);
    let rows = data.try_refresh()?;

    if rows.is_empty() {
        println!("No balances to display");
    } else {
        println!("{}", format_rows_plain(&rows));
    }
    println!("Total: {}", format_usd(data.total_usd()));
    Ok(())
}

/// Main application loop.
async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    app.update(Action::Tick);

    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if crossterm::event::poll(Duration::from_millis(1))? {
            let event = crossterm::event::read()?;
            if let Some(action) = handle_event(&event) {
                app.update(action);
            }
        } else {
            tokio::time::sleep(TICK_RATE).await;
        }

        app.update(Action::Tick);
    }
    Ok(())
}
