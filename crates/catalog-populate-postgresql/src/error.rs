//! Error types for the PostgreSQL seeder.

use thiserror::Error;

/// Errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum SeederError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Every connection attempt failed.
    #[error("Could not connect to {target} after {attempts} attempts: {source}")]
    ConnectRetriesExhausted {
        target: String,
        attempts: u32,
        #[source]
        source: Box<SeederError>,
    },

    /// Metadata could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connection error outside of the PostgreSQL driver.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store-level error raised by a non-PostgreSQL store.
    #[error("Store error: {0}")]
    Store(String),
}
