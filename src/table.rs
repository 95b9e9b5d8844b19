//! Table handles.

use ledger_core::query::Query;
use ledger_core::record::Record;
use ledger_core::types::RecordId;
use ledger_engine::Changeset;
use ledger_storage::{MemTable, Snapshot};
use std::sync::Arc;

/// A cheap, cloneable handle to one named table.
///
/// The handle holds no state beyond a shared reference to the underlying
/// table; cloning it is an `Arc` bump. All mutation goes through
/// [`changeset`](Table::changeset).
#[derive(Debug, Clone)]
pub struct Table {
    inner: Arc<MemTable>,
}

impl Table {
    pub(crate) fn new(inner: Arc<MemTable>) -> Self {
        Table { inner }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of atomic updates applied so far.
    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    /// Get a record by identifier.
    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.inner.get(id)
    }

    /// Check whether an identifier is present.
    pub fn contains(&self, id: RecordId) -> bool {
        self.inner.contains(id)
    }

    /// All records, ordered by identifier.
    pub fn all(&self) -> Snapshot {
        self.inner.all()
    }

    /// Records matching a query predicate.
    pub fn search(&self, query: &Query) -> Vec<(RecordId, Record)> {
        self.inner.search(query)
    }

    /// Start an empty changeset bound to this table.
    ///
    /// # Example
    ///
    /// ```
    /// use ledgerdb::prelude::*;
    ///
    /// let db = Ledger::new();
    /// let table = db.table("users");
    ///
    /// let mut changeset = table.changeset();
    /// changeset.insert_multiple([
    ///     Record::try_from(serde_json::json!({"name": "alice"}))?,
    ///     Record::try_from(serde_json::json!({"name": "bob"}))?,
    /// ]);
    /// changeset.execute()?;
    ///
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn changeset(&self) -> Changeset<'_, MemTable> {
        Changeset::new(self.inner.as_ref())
    }
}
