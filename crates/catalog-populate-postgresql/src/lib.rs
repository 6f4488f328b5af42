//! PostgreSQL seeder for synthetic marketplace products.
//!
//! This crate replaces the contents of the `products` table with a batch
//! produced by `catalog-generator`:
//!
//! 1. Connect, retrying while the database starts up ([`connect_with_retries`])
//! 2. In one transaction: create the table if absent, truncate it, drop the
//!    metadata index, insert the batch, commit ([`Seeder`])
//! 3. Close the connection
//!
//! # Example
//!
//! ```ignore
//! use catalog_populate_postgresql::{ConnectionConfig, PostgresConnector, SeedConfig, Seeder};
//!
//! let connector = PostgresConnector::new(&ConnectionConfig::default());
//! let seeder = Seeder::new(connector, SeedConfig::default().with_record_count(1000));
//!
//! match seeder.run().await? {
//!     SeedOutcome::Completed(report) => println!("{} rows", report.rows_inserted),
//!     SeedOutcome::Aborted(failure) => eprintln!("{failure}"),
//! }
//! ```

pub mod args;
pub mod config;
mod connect;
pub mod duration;
mod error;
pub mod insert;
mod postgres;
mod seeder;
mod store;
pub mod testing;

pub use args::{ConnectionArgs, GenerateArgs, SeedArgs};
pub use config::{ConnectionConfig, RetryPolicy, SeedConfig};
pub use connect::connect_with_retries;
pub use error::SeederError;
pub use postgres::{PostgresConnector, PostgresStore};
pub use seeder::{SeedOutcome, SeedReport, SeedStage, Seeder, StageFailure};
pub use store::{ProductStore, StoreConnector};
