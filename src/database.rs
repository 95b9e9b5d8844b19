//! Main entry point: a registry of named in-memory tables.

use crate::table::Table;
use dashmap::DashMap;
use ledger_storage::MemTable;
use std::sync::Arc;

/// A collection of named in-memory tables.
///
/// `table()` get-or-creates: asking for a name the first time creates an
/// empty table, and every later call returns a handle to the same one.
/// Changesets bind to exactly one table; there are no cross-table
/// transactions.
///
/// # Example
///
/// ```
/// use ledgerdb::prelude::*;
///
/// let db = Ledger::new();
/// let events = db.table("events");
///
/// let mut changeset = events.changeset();
/// changeset.insert(Record::new());
/// changeset.execute()?;
///
/// assert_eq!(events.len(), 1);
/// # Ok::<(), ledgerdb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Ledger {
    /// Named tables; each entry is shared with the handles given out
    tables: DashMap<String, Arc<MemTable>>,
}

impl Ledger {
    /// Create an empty database.
    pub fn new() -> Self {
        Ledger {
            tables: DashMap::new(),
        }
    }

    /// Get a handle to the named table, creating it if absent.
    pub fn table(&self, name: &str) -> Table {
        let inner = self
            .tables
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemTable::new(name)))
            .clone();
        Table::new(inner)
    }

    /// Check whether a table with this name exists.
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Drop a table and all its records.
    ///
    /// Returns true if the table existed. Handles already given out keep
    /// the old records alive until they are dropped.
    pub fn drop_table(&self, name: &str) -> bool {
        self.tables.remove(name).is_some()
    }

    /// Names of all existing tables.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|e| e.key().clone()).collect()
    }
}
