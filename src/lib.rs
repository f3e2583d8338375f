#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{FetchError, FetchOutcome, PriceFetcher, RefreshCache, YahooFetcher};
pub use domain::{Category, PriceSeries, Symbol};
pub use ui::{FuturesDashApp, RefreshSettings};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::REFRESH;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds between refresh passes
    #[arg(long, default_value_t = REFRESH.tick_interval_ms / 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: u64,

    /// Seconds a fetched result (or failure) is served from memory
    #[arg(long, default_value_t = REFRESH.cache_ttl_secs)]
    pub ttl_secs: u64,

    /// Fetch every tracked symbol on each pass so market analysis has full input
    #[arg(long, default_value_t = false)]
    pub prefetch_all: bool,

    /// Category to open on, overriding the persisted one (e.g. "bond", "Currency Futures")
    #[arg(long)]
    pub category: Option<Category>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    cli: &Cli,
    fetcher: Box<dyn PriceFetcher + Send>,
) -> Box<dyn eframe::App> {
    let settings = RefreshSettings::from_cli(cli);
    let app = ui::FuturesDashApp::new(cc, fetcher, settings, cli.category);
    Box::new(app)
}
