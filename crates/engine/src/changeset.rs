//! Changesets: ordered operation batches applied atomically
//!
//! A [`Changeset`] records operations against a table handle and applies
//! them all in one call to the storage collaborator's atomic-update
//! primitive, followed by exactly one cache invalidation. Ordering is
//! semantically significant: a later operation sees the effects of earlier
//! ones in the same changeset, and identifier assignment happens at apply
//! time from the table state at that point in the sequence.

use crate::operation::{Mutator, Operation};
use ledger_core::error::Result;
use ledger_core::query::Query;
use ledger_core::record::Record;
use ledger_core::traits::TableStorage;
use ledger_core::types::RecordId;
use tracing::debug;

/// An ordered batch of operations bound to a target table.
///
/// Created empty, grown only by appending, applied with [`execute`].
///
/// # Examples
///
/// ```
/// use ledger_engine::Changeset;
/// use ledger_storage::MemTable;
/// use ledger_core::Record;
///
/// let table = MemTable::new("events");
/// let mut changeset = Changeset::new(&table);
/// changeset.insert(Record::new());
/// changeset.execute()?;
///
/// assert_eq!(table.len(), 1);
/// # Ok::<(), ledger_core::Error>(())
/// ```
///
/// [`execute`]: Changeset::execute
#[derive(Debug)]
pub struct Changeset<'t, S: TableStorage> {
    /// Target table handle; the changeset never owns the table
    table: &'t S,
    /// Recorded operations, in append order
    ops: Vec<Operation>,
}

impl<'t, S: TableStorage> Changeset<'t, S> {
    /// Create an empty changeset bound to `table`.
    pub fn new(table: &'t S) -> Self {
        Changeset {
            table,
            ops: Vec::new(),
        }
    }

    /// Append an operation to the end of the batch.
    pub fn append(&mut self, operation: Operation) {
        self.ops.push(operation);
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if no operations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The recorded operations, in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Apply every recorded operation to the table as one atomic batch.
    ///
    /// Builds a single transform closing over the recorded operations and
    /// hands it to the collaborator's atomic-update primitive; when that
    /// returns, signals cache invalidation. Collaborator failures
    /// propagate unmodified, and no invalidation is signalled for a
    /// failed update.
    ///
    /// Not idempotent: calling `execute` again re-applies every recorded
    /// operation against whatever table state then exists, which may
    /// double-insert or re-match. Treating a changeset as single-use is
    /// the caller's responsibility.
    pub fn execute(&self) -> Result<()> {
        debug!(operations = self.ops.len(), "executing changeset");

        let ops = &self.ops;
        self.table.atomic_update(Box::new(move |table| {
            for op in ops {
                op.perform(table);
            }
        }))?;
        self.table.invalidate_cache();
        Ok(())
    }

    // ========================================================================
    // Convenience appenders
    // ========================================================================

    /// Append a single-record insert.
    pub fn insert(&mut self, record: Record) {
        self.append(Operation::bulk_insert([record]));
    }

    /// Append a bulk insert.
    pub fn insert_multiple(&mut self, records: impl IntoIterator<Item = Record>) {
        self.append(Operation::bulk_insert(records));
    }

    /// Append an update matching by predicate only.
    pub fn update_where(&mut self, query: Query, mutator: Mutator) {
        self.append(Operation::update(mutator, query, []));
    }

    /// Append an update matching by identifiers only.
    pub fn update_ids(&mut self, ids: impl IntoIterator<Item = RecordId>, mutator: Mutator) {
        self.append(Operation::update(mutator, Query::none(), ids));
    }

    /// Append a remove matching by predicate only.
    pub fn remove_where(&mut self, query: Query) {
        self.append(Operation::remove(query, []));
    }

    /// Append a remove matching by identifiers only.
    pub fn remove_ids(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.append(Operation::remove(Query::none(), ids));
    }
}
