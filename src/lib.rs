#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{CoinGeckoClient, MarketDataApi, RequestError};
pub use models::{CoinFilter, Currency, MarketCoin, SelectableItem};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the market data API base URL (e.g. to point at a proxy)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of coins requested per listing query
    #[arg(long)]
    pub per_page: Option<u32>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
