//! Seeder configuration.
//!
//! Every tunable lives in one of three structs passed to the seeder at call
//! time. The `Default` impls carry the values a plain `marketplace-seed`
//! invocation uses.

use crate::error::SeederError;
use std::fmt;
use std::time::Duration;

/// Default number of products per run.
pub const DEFAULT_RECORD_COUNT: u64 = 100_000;
/// Default generator seed.
pub const DEFAULT_SEED: u64 = 91;
/// Default rows per INSERT statement.
pub const DEFAULT_BATCH_SIZE: usize = 1_000;
/// Default number of connection attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default delay between connection attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);
/// Default timeout for a single connection attempt.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Rows per statement are bounded by PostgreSQL's 65535 bind parameters (4 per row).
pub const MAX_BATCH_SIZE: usize = 16_383;

/// Database connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub connect_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9876,
            dbname: "marketplace".to_string(),
            user: "hones".to_string(),
            password: "secretpassword".to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ConnectionConfig {
    /// Log-safe description of the target, e.g. `hones@localhost:9876/marketplace`.
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.dbname)
    }

    /// Build the driver configuration.
    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password)
            .connect_timeout(self.connect_timeout)
            .application_name("marketplace-seed");
        config
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Bounded, fixed-delay retry for establishing the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total connection attempts, including the first
    pub max_attempts: u32,
    /// Sleep between consecutive attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// What to seed and how to reach the database.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub record_count: u64,
    pub seed: u64,
    pub batch_size: usize,
    pub retry: RetryPolicy,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            retry: RetryPolicy::default(),
        }
    }
}

impl SeedConfig {
    /// Set the number of records to generate.
    pub fn with_record_count(mut self, record_count: u64) -> Self {
        self.record_count = record_count;
        self
    }

    /// Set the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of rows per INSERT statement.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the connection retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Reject configurations the seeder cannot run with.
    pub fn validate(&self) -> Result<(), SeederError> {
        if self.retry.max_attempts == 0 {
            return Err(SeederError::Config(
                "at least one connection attempt is required".to_string(),
            ));
        }
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(SeederError::Config(format!(
                "batch size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            )));
        }
        Ok(())
    }
}
