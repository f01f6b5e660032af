//! Storefront CLI - interactive store menu.
//!
//! Menu actions:
//! - List all products in store
//! - Show total amount in store
//! - Make an order (assemble a shopping list, submit once)
//! - Quit
//!
//! This binary is a thin orchestration layer: it seeds the demo catalog,
//! prompts the user, and renders results. All business rules live in
//! `storefront-core`.

mod catalog;
mod menu;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Storefront - interactive retail inventory demo
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so it never interleaves with the menu.
    // RUST_LOG overrides the flag-derived default.
    let default_filter = if cli.verbose {
        "storefront=debug"
    } else {
        "storefront=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = catalog::demo_store()?;
    menu::run(store)
}
