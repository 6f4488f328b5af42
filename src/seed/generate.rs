//! `generate` command: write a batch as JSON lines without touching a database.

use anyhow::Context;
use catalog_generator::ProductGenerator;
use catalog_populate_postgresql::GenerateArgs;
use std::io::Write;

/// Write `count` records generated from `seed` to `writer`, one JSON object per line.
///
/// Returns the number of records written.
pub fn write_jsonl<W: Write>(writer: &mut W, count: u64, seed: u64) -> anyhow::Result<u64> {
    let mut generator = ProductGenerator::new(seed);
    let mut written = 0u64;

    for record in generator.records(count) {
        serde_json::to_writer(&mut *writer, &record)
            .with_context(|| format!("Failed to serialize record {}", record.index))?;
        writer.write_all(b"\n").context("Failed to write output")?;
        written += 1;
    }

    writer.flush().context("Failed to flush output")?;
    Ok(written)
}

/// Run the `generate` command against stdout.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    tracing::info!(
        "Generating {} records (seed={})",
        args.record_count,
        args.seed
    );

    let stdout = std::io::stdout();
    let mut writer = std::io::BufWriter::new(stdout.lock());
    let written = write_jsonl(&mut writer, args.record_count, args.seed)?;

    tracing::info!("Wrote {} records", written);
    Ok(())
}
