//! CLI argument definitions for the PostgreSQL seeder.

use crate::config::{
    ConnectionConfig, RetryPolicy, SeedConfig, DEFAULT_BATCH_SIZE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_RECORD_COUNT, DEFAULT_SEED,
};
use crate::duration::parse_duration;
use clap::Args;
use std::fmt;
use std::time::Duration;

/// PostgreSQL connection arguments.
#[derive(Args, Clone)]
pub struct ConnectionArgs {
    /// Database host
    #[arg(long, default_value = "localhost", env = "SEED_DB_HOST")]
    pub db_host: String,

    /// Database port
    #[arg(long, default_value_t = 9876, env = "SEED_DB_PORT")]
    pub db_port: u16,

    /// Database name
    #[arg(long, default_value = "marketplace", env = "SEED_DB_NAME")]
    pub db_name: String,

    /// Database user
    #[arg(long, default_value = "hones", env = "SEED_DB_USER")]
    pub db_user: String,

    /// Database password
    #[arg(
        long,
        default_value = "secretpassword",
        env = "SEED_DB_PASSWORD",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub db_password: String,

    /// Timeout for a single connection attempt (e.g. "10s")
    #[arg(long, default_value = "10s", value_parser = parse_duration, env = "SEED_CONNECT_TIMEOUT")]
    pub connect_timeout: Duration,
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&ConnectionConfig::from(self), f)
    }
}

impl From<&ConnectionArgs> for ConnectionConfig {
    fn from(args: &ConnectionArgs) -> Self {
        Self {
            host: args.db_host.clone(),
            port: args.db_port,
            dbname: args.db_name.clone(),
            user: args.db_user.clone(),
            password: args.db_password.clone(),
            connect_timeout: args.connect_timeout,
        }
    }
}

/// Generation arguments shared by `seed` and `generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of products to generate
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT, env = "SEED_RECORD_COUNT")]
    pub record_count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value_t = DEFAULT_SEED, env = "SEED_RANDOM_SEED")]
    pub seed: u64,
}

/// PostgreSQL seeding arguments.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Rows per INSERT statement
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, env = "SEED_BATCH_SIZE")]
    pub batch_size: usize,

    /// Total connection attempts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, env = "SEED_MAX_RETRIES")]
    pub max_retries: u32,

    /// Delay between connection attempts (e.g. "2s", "500ms")
    #[arg(long, default_value = "2s", value_parser = parse_duration, env = "SEED_RETRY_DELAY")]
    pub retry_delay: Duration,

    /// Dry-run mode: generate the batch and report what would be seeded without connecting
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero when seeding is aborted after a successful connection
    #[arg(long)]
    pub fail_on_abort: bool,
}

impl From<&SeedArgs> for SeedConfig {
    fn from(args: &SeedArgs) -> Self {
        SeedConfig::default()
            .with_record_count(args.generate.record_count)
            .with_seed(args.generate.seed)
            .with_batch_size(args.batch_size)
            .with_retry(RetryPolicy {
                max_attempts: args.max_retries,
                delay: args.retry_delay,
            })
    }
}
