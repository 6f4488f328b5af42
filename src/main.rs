//! Command-line interface for marketplace-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed localhost:9876/marketplace with 100000 products
//! marketplace-seed
//!
//! # Same, with settings from the environment
//! SEED_DB_HOST=db SEED_RECORD_COUNT=5000 marketplace-seed
//!
//! # Check what would be seeded
//! marketplace-seed seed --dry-run --record-count 1000
//!
//! # Fail the process if seeding aborts after connecting
//! marketplace-seed seed --fail-on-abort
//! ```

use clap::Parser;
use marketplace_seed::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    Cli::parse().run().await
}
