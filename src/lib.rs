//! marketplace-seed
//!
//! Seeds a PostgreSQL marketplace database with synthetic products.
//!
//! # Crates
//!
//! - `catalog_core` - Product model and JSON metadata shape
//! - `catalog_generator` - Deterministic product generator
//! - `catalog_populate_postgresql` - Retrying connection and seeding run
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed with defaults (100000 products, seed 91, localhost:9876/marketplace)
//! marketplace-seed
//!
//! # Seed a different server with a smaller batch
//! marketplace-seed seed --db-host db --db-port 5432 --record-count 1000
//!
//! # Print a batch as JSON lines without a database
//! marketplace-seed generate --record-count 5
//! ```

use catalog_populate_postgresql::{GenerateArgs, SeedArgs};
use clap::{Parser, Subcommand};

pub mod seed;

#[derive(Parser)]
#[command(name = "marketplace-seed")]
#[command(about = "Seed a PostgreSQL marketplace database with synthetic products")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed options used when no subcommand is given
    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the products table with a freshly generated batch
    Seed {
        #[command(flatten)]
        args: SeedArgs,
    },

    /// Write a generated batch to stdout as JSON lines
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

impl Cli {
    /// Run the selected command. Without a subcommand this seeds.
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Seed { args }) => seed::run_seed(&args).await,
            Some(Commands::Generate { args }) => seed::run_generate(&args),
            None => seed::run_seed(&self.seed).await,
        }
    }
}
