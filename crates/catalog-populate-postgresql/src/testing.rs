//! In-memory store for exercising the seeder without a database.
//!
//! [`MemoryConnector`] mimics the parts of PostgreSQL the seeder relies on:
//! a `products` table with an identity counter, an optional metadata index,
//! and transactions that either commit as a whole or roll back. Failures can
//! be injected at connect time and at any store operation.

use crate::error::SeederError;
use crate::store::{ProductStore, StoreConnector};
use catalog_core::ProductRecord;
use std::sync::{Arc, Mutex, MutexGuard};

/// Store operation at which an injected failure fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Begin,
    EnsureTable,
    Truncate,
    DropIndex,
    Insert,
    Commit,
}

/// A stored `products` row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProduct {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTable {
    pub rows: Vec<StoredProduct>,
    /// Next value of the `id` sequence
    pub next_id: i64,
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Committed database state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDatabase {
    /// `None` until the table is created
    pub table: Option<MemoryTable>,
    pub metadata_index: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    committed: MemoryDatabase,
    failing_connects: u32,
    connect_attempts: u32,
    fail_at: Option<FailPoint>,
    opened: u32,
    closed: u32,
}

/// Connector handing out [`MemoryStore`]s over shared state.
///
/// Clones share the same database, so a test can keep a handle for
/// inspection after moving one into a seeder.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `count` connection attempts.
    pub fn failing_connects(self, count: u32) -> Self {
        self.lock().failing_connects = count;
        self
    }

    /// Fail every store operation of the given kind.
    pub fn fail_at(self, point: FailPoint) -> Self {
        self.set_fail_at(Some(point));
        self
    }

    /// Change or clear the injected failure between runs.
    pub fn set_fail_at(&self, point: Option<FailPoint>) {
        self.lock().fail_at = point;
    }

    /// Start with an existing metadata index.
    pub fn with_metadata_index(self) -> Self {
        self.lock().committed.metadata_index = true;
        self
    }

    /// Copy of the committed state.
    pub fn snapshot(&self) -> MemoryDatabase {
        self.lock().committed.clone()
    }

    /// Committed rows in `products`, zero if the table does not exist.
    pub fn row_count(&self) -> u64 {
        self.lock()
            .committed
            .table
            .as_ref()
            .map(|t| t.rows.len() as u64)
            .unwrap_or(0)
    }

    pub fn connect_attempts(&self) -> u32 {
        self.lock().connect_attempts
    }

    /// Stores opened and not yet closed.
    pub fn open_sessions(&self) -> u32 {
        let state = self.lock();
        state.opened - state.closed
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<MemoryState>) -> MutexGuard<'_, MemoryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait::async_trait]
impl StoreConnector for MemoryConnector {
    type Store = MemoryStore;

    fn target(&self) -> String {
        "memory".to_string()
    }

    async fn connect(&self) -> Result<MemoryStore, SeederError> {
        let mut state = self.lock();
        state.connect_attempts += 1;
        if state.connect_attempts <= state.failing_connects {
            return Err(SeederError::Connection(
                "connection refused: the database system is starting up".to_string(),
            ));
        }
        state.opened += 1;
        Ok(MemoryStore {
            state: Arc::clone(&self.state),
            transaction: None,
        })
    }
}

/// An open session on a [`MemoryConnector`]'s database.
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
    /// Working copy while a transaction is open
    transaction: Option<MemoryDatabase>,
}

impl MemoryStore {
    fn check(&self, point: FailPoint) -> Result<(), SeederError> {
        if lock_state(&self.state).fail_at == Some(point) {
            return Err(SeederError::Store(format!("injected failure at {point:?}")));
        }
        Ok(())
    }

    /// Apply `f` to the transaction's working copy, or to the committed state outside one.
    fn with_db<T>(&mut self, f: impl FnOnce(&mut MemoryDatabase) -> T) -> T {
        match self.transaction.as_mut() {
            Some(db) => f(db),
            None => f(&mut lock_state(&self.state).committed),
        }
    }
}

fn missing_table() -> SeederError {
    SeederError::Store("relation \"products\" does not exist".to_string())
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn begin(&mut self) -> Result<(), SeederError> {
        self.check(FailPoint::Begin)?;
        let committed = lock_state(&self.state).committed.clone();
        self.transaction = Some(committed);
        Ok(())
    }

    async fn ensure_table(&mut self) -> Result<(), SeederError> {
        self.check(FailPoint::EnsureTable)?;
        self.with_db(|db| {
            db.table.get_or_insert_with(MemoryTable::default);
        });
        Ok(())
    }

    async fn truncate(&mut self) -> Result<(), SeederError> {
        self.check(FailPoint::Truncate)?;
        self.with_db(|db| match db.table.as_mut() {
            Some(table) => {
                *table = MemoryTable::default();
                Ok(())
            }
            None => Err(missing_table()),
        })
    }

    async fn drop_metadata_index(&mut self) -> Result<(), SeederError> {
        self.check(FailPoint::DropIndex)?;
        self.with_db(|db| db.metadata_index = false);
        Ok(())
    }

    async fn insert_batch(&mut self, records: &[ProductRecord]) -> Result<u64, SeederError> {
        self.check(FailPoint::Insert)?;
        let metadata = records
            .iter()
            .map(|r| r.metadata.to_json())
            .collect::<Result<Vec<_>, _>>()?;

        self.with_db(|db| {
            let table = db.table.as_mut().ok_or_else(missing_table)?;
            for (record, metadata) in records.iter().zip(metadata) {
                let id = table.next_id;
                table.next_id += 1;
                table.rows.push(StoredProduct {
                    id,
                    name: record.name.clone(),
                    category: record.category.to_string(),
                    brand: record.brand.to_string(),
                    metadata,
                });
            }
            Ok(records.len() as u64)
        })
    }

    async fn commit(&mut self) -> Result<(), SeederError> {
        self.check(FailPoint::Commit)?;
        if let Some(db) = self.transaction.take() {
            lock_state(&self.state).committed = db;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), SeederError> {
        self.transaction = None;
        Ok(())
    }

    async fn row_count(&mut self) -> Result<u64, SeederError> {
        self.with_db(|db| {
            db.table
                .as_ref()
                .map(|t| t.rows.len() as u64)
                .ok_or_else(missing_table)
        })
    }

    async fn close(mut self) -> Result<(), SeederError> {
        // An open transaction dies with its session
        self.transaction = None;
        lock_state(&self.state).closed += 1;
        Ok(())
    }
}
