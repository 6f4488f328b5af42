//! SQL for the `products` table and batched INSERT logic.

use crate::error::SeederError;
use catalog_core::ProductRecord;
use tokio_postgres::types::{Json, ToSql};
use tokio_postgres::Client;

/// Target table.
pub const PRODUCTS_TABLE: &str = "products";

/// Secondary index over `metadata`, maintained outside this tool.
pub const METADATA_INDEX: &str = "idx_products_metadata";

/// Columns written per row, in bind order.
pub const INSERT_COLUMNS: [&str; 4] = ["name", "category", "brand", "metadata"];

/// Create the target table if it does not exist.
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT,
    brand TEXT,
    metadata JSONB
)";

/// Remove every row and reset the `id` sequence.
pub const TRUNCATE_SQL: &str = "TRUNCATE TABLE products RESTART IDENTITY";

/// Drop the metadata index so the reload does not maintain it row by row.
pub const DROP_METADATA_INDEX_SQL: &str = "DROP INDEX IF EXISTS idx_products_metadata";

pub const COUNT_SQL: &str = "SELECT COUNT(*) FROM products";

/// Build a multi-row INSERT with `$n` placeholders for `row_count` rows.
pub fn insert_statement(row_count: usize) -> String {
    let col_count = INSERT_COLUMNS.len();
    let mut param_idx = 1;

    let placeholders: Vec<String> = (0..row_count)
        .map(|_| {
            let row: Vec<String> = (0..col_count)
                .map(|_| {
                    let p = format!("${param_idx}");
                    param_idx += 1;
                    p
                })
                .collect();
            format!("({})", row.join(", "))
        })
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        PRODUCTS_TABLE,
        INSERT_COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// Insert a batch of records with a single statement.
pub async fn insert_batch(client: &Client, records: &[ProductRecord]) -> Result<u64, SeederError> {
    if records.is_empty() {
        return Ok(0);
    }

    let sql = insert_statement(records.len());

    let categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let brands: Vec<&str> = records.iter().map(|r| r.brand.as_str()).collect();
    let metadata: Vec<_> = records.iter().map(|r| Json(&r.metadata)).collect();

    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(records.len() * 4);
    for (i, record) in records.iter().enumerate() {
        params.push(&record.name);
        params.push(&categories[i]);
        params.push(&brands[i]);
        params.push(&metadata[i]);
    }

    let inserted = client.execute(&sql, &params).await?;
    Ok(inserted)
}
