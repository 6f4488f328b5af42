//! `seed` command runner.

use anyhow::Context;
use catalog_generator::generate;
use catalog_populate_postgresql::{
    ConnectionConfig, PostgresConnector, SeedArgs, SeedConfig, SeedOutcome, Seeder,
    StoreConnector,
};

use super::BatchSummary;

/// Run the seed command: replace the `products` table with a generated batch.
pub async fn run_seed(args: &SeedArgs) -> anyhow::Result<()> {
    let config = SeedConfig::from(args);
    let connection = ConnectionConfig::from(&args.connection);

    if args.dry_run {
        config.validate().context("Invalid seed configuration")?;

        let records = generate(config.record_count, config.seed);
        tracing::info!(
            "[DRY-RUN] Would seed {} (seed={})",
            connection.target(),
            config.seed
        );
        tracing::info!("[DRY-RUN] Batch: {}", BatchSummary::from_records(&records));
        tracing::info!(
            "[DRY-RUN] Connection retries: {} attempts, {:?} apart",
            config.retry.max_attempts,
            config.retry.delay
        );
        return Ok(());
    }

    let seeder = Seeder::new(PostgresConnector::new(&connection), config);
    seed_with(&seeder, args.fail_on_abort).await
}

/// Run a seeder and apply the abort policy.
///
/// Connection failures are always errors. An aborted stage has already been
/// logged by the seeder and only becomes an error with `fail_on_abort`.
pub async fn seed_with<C: StoreConnector>(
    seeder: &Seeder<C>,
    fail_on_abort: bool,
) -> anyhow::Result<()> {
    let outcome = seeder
        .run()
        .await
        .with_context(|| format!("Failed to seed {}", seeder.connector().target()))?;

    match outcome {
        SeedOutcome::Completed(report) => {
            tracing::info!(
                "Seeded {} rows in {} batches (generate {:?}, insert {:?})",
                report.rows_inserted,
                report.batch_count,
                report.generation_duration,
                report.insert_duration
            );
            Ok(())
        }
        SeedOutcome::Aborted(failure) if fail_on_abort => Err(failure.into()),
        SeedOutcome::Aborted(failure) => {
            tracing::warn!("Seeding did not complete ({}); exiting normally", failure.stage);
            Ok(())
        }
    }
}
