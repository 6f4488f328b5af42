//! Seeding workflow tests against the in-memory store.
//!
//! Each test drives a full `Seeder::run` and inspects the committed state
//! afterwards, the same way an operator would query the table.

use catalog_populate_postgresql::testing::{FailPoint, MemoryConnector};
use catalog_populate_postgresql::{RetryPolicy, SeedConfig, SeedStage, Seeder, SeederError};
use std::time::Duration;

const SEED: u64 = 91;

fn config(record_count: u64) -> SeedConfig {
    SeedConfig::default()
        .with_record_count(record_count)
        .with_seed(SEED)
        .with_batch_size(30)
        .with_retry(RetryPolicy {
            max_attempts: 5,
            delay: Duration::from_millis(1),
        })
}

#[tokio::test]
async fn test_fresh_store_gets_table_and_batch() {
    let connector = MemoryConnector::new();
    let seeder = Seeder::new(connector.clone(), config(100));

    let outcome = seeder.run().await.unwrap();
    assert!(outcome.is_completed());
    assert_eq!(outcome.report().unwrap().rows_inserted, 100);
    assert_eq!(connector.row_count(), 100);

    let table = connector.snapshot().table.unwrap();
    for (i, row) in table.rows.iter().enumerate() {
        let index = i as i64 + 1;
        assert_eq!(row.id, index);
        assert!(row.name.ends_with(&format!("Item {index}")));
        assert!(row.name.starts_with(&row.brand));
        assert!(row.name.contains(&row.category));
        assert!(row.metadata["pricing"]["msrp"].is_number());
    }
    assert_eq!(connector.open_sessions(), 0);
}

#[tokio::test]
async fn test_reseeding_replaces_previous_batch() {
    let connector = MemoryConnector::new();

    Seeder::new(connector.clone(), config(100)).run().await.unwrap();
    assert_eq!(connector.row_count(), 100);

    Seeder::new(connector.clone(), config(40)).run().await.unwrap();
    assert_eq!(connector.row_count(), 40);

    // Identity restarts with the truncate
    let table = connector.snapshot().table.unwrap();
    assert_eq!(table.rows.first().unwrap().id, 1);
    assert_eq!(table.rows.last().unwrap().id, 40);
    assert_eq!(table.next_id, 41);
}

#[tokio::test]
async fn test_same_seed_stores_same_rows() {
    let first = MemoryConnector::new();
    let second = MemoryConnector::new();

    Seeder::new(first.clone(), config(25)).run().await.unwrap();
    Seeder::new(second.clone(), config(25)).run().await.unwrap();

    assert_eq!(first.snapshot(), second.snapshot());
}

#[tokio::test]
async fn test_metadata_index_is_dropped() {
    let connector = MemoryConnector::new().with_metadata_index();
    Seeder::new(connector.clone(), config(10)).run().await.unwrap();
    assert!(!connector.snapshot().metadata_index);
}

#[tokio::test]
async fn test_transient_connect_failures_are_retried() {
    let connector = MemoryConnector::new().failing_connects(4);
    let outcome = Seeder::new(connector.clone(), config(10)).run().await.unwrap();
    assert!(outcome.is_completed());
    assert_eq!(connector.connect_attempts(), 5);
    assert_eq!(connector.row_count(), 10);
}

#[tokio::test]
async fn test_exhausted_retries_surface_as_error() {
    let connector = MemoryConnector::new().failing_connects(5);
    let result = Seeder::new(connector.clone(), config(10)).run().await;

    assert!(matches!(
        result,
        Err(SeederError::ConnectRetriesExhausted { attempts: 5, .. })
    ));
    assert_eq!(connector.connect_attempts(), 5);
    assert_eq!(connector.open_sessions(), 0);
    assert!(connector.snapshot().table.is_none());
}

#[tokio::test]
async fn test_insert_failure_is_contained_and_rolled_back() {
    let connector = MemoryConnector::new().with_metadata_index();
    Seeder::new(connector.clone(), config(50)).run().await.unwrap();
    let before = connector.snapshot();

    connector.set_fail_at(Some(FailPoint::Insert));
    let outcome = Seeder::new(connector.clone(), config(20)).run().await.unwrap();

    let failure = outcome.into_result().unwrap_err();
    assert_eq!(failure.stage, SeedStage::Loading);
    assert!(failure.to_string().contains("loading"));

    // Truncate and index drop were rolled back together with the insert
    assert_eq!(connector.snapshot(), before);
    assert_eq!(connector.row_count(), 50);
    assert_eq!(connector.open_sessions(), 0);
}

#[tokio::test]
async fn test_prepare_failure_skips_loading() {
    let connector = MemoryConnector::new().with_metadata_index();
    Seeder::new(connector.clone(), config(15)).run().await.unwrap();

    connector.set_fail_at(Some(FailPoint::Truncate));
    let outcome = Seeder::new(connector.clone(), config(99)).run().await.unwrap();

    assert!(!outcome.is_completed());
    assert_eq!(outcome.into_result().unwrap_err().stage, SeedStage::Preparing);
    assert_eq!(connector.row_count(), 15);
    assert_eq!(connector.open_sessions(), 0);
}

#[tokio::test]
async fn test_commit_failure_leaves_store_untouched() {
    let connector = MemoryConnector::new().fail_at(FailPoint::Commit);
    let outcome = Seeder::new(connector.clone(), config(10)).run().await.unwrap();

    assert_eq!(outcome.into_result().unwrap_err().stage, SeedStage::Loading);
    // Even the table creation belonged to the rolled back transaction
    assert!(connector.snapshot().table.is_none());
}
