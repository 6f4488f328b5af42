//! Store abstraction used by the seeder.
//!
//! The seeder only talks to a [`StoreConnector`] and the [`ProductStore`] it
//! opens. [`crate::PostgresConnector`] is the production implementation and
//! [`crate::testing::MemoryConnector`] backs the tests.

use crate::error::SeederError;
use catalog_core::ProductRecord;

/// Opens connections to a product store.
#[async_trait::async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: ProductStore;

    /// Log-safe description of the target. Must not contain credentials.
    fn target(&self) -> String;

    /// Make a single connection attempt.
    async fn connect(&self) -> Result<Self::Store, SeederError>;
}

/// An open connection to the store holding the `products` table.
///
/// Operations between [`ProductStore::begin`] and [`ProductStore::commit`]
/// become visible together or not at all.
#[async_trait::async_trait]
pub trait ProductStore: Send {
    async fn begin(&mut self) -> Result<(), SeederError>;

    /// Create the `products` table if it does not exist.
    async fn ensure_table(&mut self) -> Result<(), SeederError>;

    /// Delete every row and reset the identity counter.
    async fn truncate(&mut self) -> Result<(), SeederError>;

    /// Drop the metadata index if present.
    async fn drop_metadata_index(&mut self) -> Result<(), SeederError>;

    /// Insert records, returning the number of rows written.
    async fn insert_batch(&mut self, records: &[ProductRecord]) -> Result<u64, SeederError>;

    async fn commit(&mut self) -> Result<(), SeederError>;

    async fn rollback(&mut self) -> Result<(), SeederError>;

    /// Number of rows currently in `products`.
    async fn row_count(&mut self) -> Result<u64, SeederError>;

    /// Release the connection.
    async fn close(self) -> Result<(), SeederError>
    where
        Self: Sized;
}
