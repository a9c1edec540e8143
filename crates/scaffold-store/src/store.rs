use crate::{Record, Value};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Schema-less, in-memory, multi-table key-value store.
///
/// Tables are created on first write and keyed independently: the same id
/// may appear in any number of tables. Rows are plain [`Record`]s with no
/// schema and no foreign keys.
///
/// `Store` is a cheap handle. Cloning it shares the underlying tables, which
/// is how one store instance is handed to many repositories. Nothing is
/// persisted; every process starts with an empty store.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    tables: IndexMap<String, Table>,
}

type Table = IndexMap<String, Record>;

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    /// Store a copy of `data` under `id`, silently replacing any existing row.
    ///
    /// Returns the stored row.
    pub fn insert(&self, table: &str, id: impl Into<String>, data: impl Into<Record>) -> Record {
        let id = id.into();
        let row = data.into();
        trace!(table, id = %id, "insert");

        self.lock()
            .tables
            .entry(table.to_string())
            .or_default()
            .insert(id, row.clone());

        row
    }

    /// Returns a copy of the row stored under `id` with the id merged in
    /// under the `id` key, if the row exists.
    pub fn find_by_id(&self, table: &str, id: &str) -> Option<Record> {
        trace!(table, id, "find_by_id");
        let tables = self.lock();
        let row = tables.tables.get(table)?.get(id)?;
        Some(with_id(id, row))
    }

    /// Merge `data` into the row stored under `id`.
    ///
    /// Fields present in `data` overwrite existing ones; all other fields are
    /// kept. Returns the merged row, or `None` without creating anything if
    /// the row does not exist.
    pub fn update(&self, table: &str, id: &str, data: impl Into<Record>) -> Option<Record> {
        trace!(table, id, "update");

        let mut tables = self.lock();
        let row = tables.tables.get_mut(table)?.get_mut(id)?;
        row.extend(data.into());

        Some(row.clone())
    }

    /// Delete the row stored under `id`, returning it.
    pub fn remove(&self, table: &str, id: &str) -> Option<Record> {
        trace!(table, id, "remove");
        self.lock().tables.get_mut(table)?.shift_remove(id)
    }

    /// Every row in `table`, in insertion order, each with its id merged in
    /// under the `id` key.
    ///
    /// The returned vector is built fresh on every call.
    pub fn find_all(&self, table: &str) -> Vec<Record> {
        trace!(table, "find_all");

        let tables = self.lock();
        let Some(rows) = tables.tables.get(table) else {
            return vec![];
        };

        rows.iter().map(|(id, row)| with_id(id, row)).collect()
    }

    /// Number of rows in `table`. Unknown tables are empty.
    pub fn len(&self, table: &str) -> usize {
        self.lock().tables.get(table).map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    /// Names of all tables that have been written to, in creation order.
    pub fn tables(&self) -> Vec<String> {
        self.lock().tables.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // Every operation is a single step, so a panic elsewhere cannot leave
        // a table half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn with_id(id: &str, row: &Record) -> Record {
    let mut row = row.clone();
    row.insert("id".to_string(), Value::from(id));
    row
}
