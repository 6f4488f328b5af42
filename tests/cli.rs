//! CLI parsing and command handler tests.
//!
//! None of these need a database: seeding goes through the in-memory store
//! or runs in dry-run mode.

use catalog_populate_postgresql::testing::{FailPoint, MemoryConnector};
use catalog_populate_postgresql::{RetryPolicy, SeedConfig, Seeder};
use clap::Parser;
use marketplace_seed::seed::seed_with;
use marketplace_seed::{Cli, Commands};
use std::time::Duration;

fn memory_seeder(connector: &MemoryConnector, record_count: u64) -> Seeder<MemoryConnector> {
    let config = SeedConfig::default()
        .with_record_count(record_count)
        .with_retry(RetryPolicy {
            max_attempts: 2,
            delay: Duration::from_millis(1),
        });
    Seeder::new(connector.clone(), config)
}

#[test]
fn test_no_arguments_seeds_with_defaults() {
    let cli = Cli::parse_from(["marketplace-seed"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.seed.generate.record_count, 100_000);
    assert_eq!(cli.seed.generate.seed, 91);
    assert_eq!(cli.seed.max_retries, 5);
    assert!(!cli.seed.dry_run);
}

#[test]
fn test_top_level_flags_without_subcommand() {
    let cli = Cli::parse_from(["marketplace-seed", "--record-count", "10", "--dry-run"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.seed.generate.record_count, 10);
    assert!(cli.seed.dry_run);
}

#[test]
fn test_seed_subcommand() {
    let cli = Cli::parse_from([
        "marketplace-seed",
        "seed",
        "--db-port",
        "5432",
        "--fail-on-abort",
    ]);
    match cli.command {
        Some(Commands::Seed { args }) => {
            assert_eq!(args.connection.db_port, 5432);
            assert!(args.fail_on_abort);
        }
        _ => panic!("expected seed subcommand"),
    }
}

#[test]
fn test_generate_subcommand() {
    let cli = Cli::parse_from(["marketplace-seed", "generate", "--record-count", "5"]);
    match cli.command {
        Some(Commands::Generate { args }) => {
            assert_eq!(args.record_count, 5);
            assert_eq!(args.seed, 91);
        }
        _ => panic!("expected generate subcommand"),
    }
}

#[tokio::test]
async fn test_dry_run_needs_no_database() {
    let cli = Cli::parse_from([
        "marketplace-seed",
        "seed",
        "--dry-run",
        "--record-count",
        "50",
        "--db-port",
        "1",
    ]);
    cli.run().await.unwrap();
}

#[tokio::test]
async fn test_dry_run_rejects_invalid_batch_size() {
    let cli = Cli::parse_from(["marketplace-seed", "--dry-run", "--batch-size", "0"]);
    assert!(cli.run().await.is_err());
}

#[tokio::test]
async fn test_completed_seed_is_ok() {
    let connector = MemoryConnector::new();
    seed_with(&memory_seeder(&connector, 100), true).await.unwrap();
    assert_eq!(connector.row_count(), 100);
}

#[tokio::test]
async fn test_aborted_seed_exits_normally_by_default() {
    let connector = MemoryConnector::new().fail_at(FailPoint::Insert);
    seed_with(&memory_seeder(&connector, 10), false).await.unwrap();
    assert_eq!(connector.row_count(), 0);
}

#[tokio::test]
async fn test_aborted_seed_fails_when_requested() {
    let connector = MemoryConnector::new().fail_at(FailPoint::Insert);
    let err = seed_with(&memory_seeder(&connector, 10), true)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("loading"));
}

#[tokio::test]
async fn test_connection_exhaustion_is_always_an_error() {
    let connector = MemoryConnector::new().failing_connects(2);
    let err = seed_with(&memory_seeder(&connector, 10), false)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("after 2 attempts"));
}
