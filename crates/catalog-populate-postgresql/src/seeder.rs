//! Seeding run: connect, prepare the table, load a fresh batch.

use crate::config::SeedConfig;
use crate::connect::connect_with_retries;
use crate::error::SeederError;
use crate::store::{ProductStore, StoreConnector};
use catalog_generator::generate;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Phase of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStage {
    Connecting,
    /// Table creation, truncation and index removal
    Preparing,
    /// Generation, insertion and commit
    Loading,
}

impl fmt::Display for SeedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedStage::Connecting => f.write_str("connecting"),
            SeedStage::Preparing => f.write_str("preparing"),
            SeedStage::Loading => f.write_str("loading"),
        }
    }
}

/// A failure after the connection was established.
#[derive(Debug, thiserror::Error)]
#[error("Seeding aborted while {stage}: {source}")]
pub struct StageFailure {
    pub stage: SeedStage,
    #[source]
    pub source: SeederError,
}

impl StageFailure {
    fn at(stage: SeedStage) -> impl FnOnce(SeederError) -> Self {
        move |source| Self { stage, source }
    }
}

/// Metrics from a completed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Number of INSERT statements executed.
    pub batch_count: u64,
    /// Time spent creating, truncating and dropping the index.
    pub prepare_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent inserting and committing.
    pub insert_duration: Duration,
    /// Total time after the connection was established.
    pub total_duration: Duration,
}

impl SeedReport {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Result of a run that managed to connect.
///
/// Failures after connecting do not make [`Seeder::run`] return `Err`; they
/// are reported here so the caller can decide whether they are fatal.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The batch was committed.
    Completed(SeedReport),
    /// A stage failed and its transaction was rolled back.
    Aborted(StageFailure),
}

impl SeedOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SeedOutcome::Completed(_))
    }

    pub fn report(&self) -> Option<&SeedReport> {
        match self {
            SeedOutcome::Completed(report) => Some(report),
            SeedOutcome::Aborted(_) => None,
        }
    }

    /// Turn an aborted run into an error.
    pub fn into_result(self) -> Result<SeedReport, StageFailure> {
        match self {
            SeedOutcome::Completed(report) => Ok(report),
            SeedOutcome::Aborted(failure) => Err(failure),
        }
    }
}

/// Replaces the contents of the `products` table with a freshly generated batch.
pub struct Seeder<C: StoreConnector> {
    connector: C,
    config: SeedConfig,
}

impl<C: StoreConnector> Seeder<C> {
    pub fn new(connector: C, config: SeedConfig) -> Self {
        Self { connector, config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Run one seeding pass.
    ///
    /// Returns `Err` only for an invalid configuration or when every
    /// connection attempt failed. Once connected, preparation and loading
    /// happen in a single transaction; a failure there is logged, rolled
    /// back and returned as [`SeedOutcome::Aborted`]. The connection is
    /// closed before returning in every case.
    pub async fn run(&self) -> Result<SeedOutcome, SeederError> {
        self.config.validate()?;

        debug!("Entering stage: {}", SeedStage::Connecting);
        let mut store = connect_with_retries(&self.connector, &self.config.retry).await?;

        let outcome = match self.seed(&mut store).await {
            Ok(report) => {
                info!(
                    "Database seeding completed: {} rows in {:?} ({:.2} rows/sec)",
                    report.rows_inserted,
                    report.total_duration,
                    report.rows_per_second()
                );
                SeedOutcome::Completed(report)
            }
            Err(failure) => {
                error!("An error occurred: {}", failure);
                if let Err(e) = store.rollback().await {
                    warn!("Rollback failed: {}", e);
                }
                SeedOutcome::Aborted(failure)
            }
        };

        if let Err(e) = store.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        }

        Ok(outcome)
    }

    async fn seed(&self, store: &mut C::Store) -> Result<SeedReport, StageFailure> {
        let start_time = Instant::now();
        let mut report = SeedReport::default();

        debug!("Entering stage: {}", SeedStage::Preparing);
        store
            .begin()
            .await
            .map_err(StageFailure::at(SeedStage::Preparing))?;
        self.prepare(store)
            .await
            .map_err(StageFailure::at(SeedStage::Preparing))?;
        report.prepare_duration = start_time.elapsed();

        debug!("Entering stage: {}", SeedStage::Loading);
        self.load(store, &mut report)
            .await
            .map_err(StageFailure::at(SeedStage::Loading))?;

        report.total_duration = start_time.elapsed();
        Ok(report)
    }

    async fn prepare(&self, store: &mut C::Store) -> Result<(), SeederError> {
        info!("Ensuring products table exists");
        store.ensure_table().await?;

        info!("Clearing old data...");
        store.truncate().await?;

        info!("Dropping existing indexes for a clean slate...");
        store.drop_metadata_index().await?;

        Ok(())
    }

    async fn load(&self, store: &mut C::Store, report: &mut SeedReport) -> Result<(), SeederError> {
        let config = &self.config;

        info!(
            "Generating {} records (seed={})",
            config.record_count, config.seed
        );
        let gen_start = Instant::now();
        let records = generate(config.record_count, config.seed);
        report.generation_duration = gen_start.elapsed();

        info!(
            "Inserting {} records (batch size: {})",
            records.len(),
            config.batch_size
        );
        let insert_start = Instant::now();
        for chunk in records.chunks(config.batch_size) {
            let inserted = store.insert_batch(chunk).await?;
            report.rows_inserted += inserted;
            report.batch_count += 1;

            debug!(
                "Batch {} complete: {} rows inserted, {} total",
                report.batch_count, inserted, report.rows_inserted
            );
        }

        store.commit().await?;
        report.insert_duration = insert_start.elapsed();

        Ok(())
    }
}
