#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use futures_dash::config::{APP_STATE_PATH, ProviderApiConfig};
use futures_dash::ui::config::UI_TEXT;
use futures_dash::{Cli, YahooFetcher, run_app};

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Provider client
    let fetcher = YahooFetcher::new(ProviderApiConfig::default())?;
    log::info!(
        "Refreshing every {}s, cache ttl {}s",
        args.refresh_secs,
        args.ttl_secs
    );

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, &args, Box::new(fetcher)))),
    )
    .map_err(|e| anyhow!("Failed to start the dashboard: {e}"))
}
