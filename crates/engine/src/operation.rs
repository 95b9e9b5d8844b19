//! Mutation operations
//!
//! An [`Operation`] is one recorded mutation command: bulk insert,
//! conditional update, or conditional remove. The enum is closed so that
//! only valid commands can be stored in a changeset; each variant carries
//! its parameters and knows how to apply itself to a record mapping.
//!
//! Operations are immutable once constructed and stateless across
//! applications: `perform` is a single step with no intermediate state
//! observable to callers, and it never fails: identifiers that are
//! missing from the table are "no match", not an error.

use ledger_core::query::Query;
use ledger_core::record::Record;
use ledger_core::types::{max_id, RecordId, RecordIdSet, TableData};
use ledger_core::value::Value;
use std::fmt;
use std::sync::Arc;

type MutatorFn = dyn Fn(&mut Record) + Send + Sync;

/// An in-place record mutation, applied to every matching record of a
/// conditional update.
///
/// Mutators are cheap to clone; the underlying closure is shared.
///
/// # Examples
///
/// ```
/// use ledger_engine::Mutator;
/// use ledger_core::{Record, Value};
///
/// let bump = Mutator::new(|r: &mut Record| {
///     let n = r.get("n").and_then(|v| v.as_int()).unwrap_or(0);
///     r.set("n", Value::Int(n + 1));
/// });
///
/// let mut record = Record::new();
/// record.set("n", Value::Int(5));
/// bump.apply(&mut record);
/// assert_eq!(record.get("n"), Some(&Value::Int(6)));
/// ```
#[derive(Clone)]
pub struct Mutator(Arc<MutatorFn>);

impl Mutator {
    /// Wrap a mutation function
    pub fn new(f: impl Fn(&mut Record) + Send + Sync + 'static) -> Self {
        Mutator(Arc::new(f))
    }

    /// A mutator that assigns one field.
    pub fn set(field: impl Into<String>, value: Value) -> Self {
        let field = field.into();
        Mutator::new(move |record: &mut Record| {
            record.set(field.clone(), value.clone());
        })
    }

    /// Mutate a record in place
    pub fn apply(&self, record: &mut Record) {
        (self.0)(record)
    }
}

impl fmt::Debug for Mutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mutator(..)")
    }
}

/// One recorded mutation command.
///
/// Constructed via [`Operation::bulk_insert`], [`Operation::update`], or
/// [`Operation::remove`]; applied with [`Operation::perform`].
#[derive(Debug, Clone)]
pub enum Operation {
    /// Insert a batch of records, assigning fresh consecutive identifiers
    BulkInsert {
        /// Records to insert, in assignment order
        records: Vec<Record>,
    },
    /// Mutate every record matched by id or predicate
    ConditionalUpdate {
        /// Mutation applied to each matching record
        mutator: Mutator,
        /// Predicate arm of the matching rule
        query: Query,
        /// Identifier arm of the matching rule
        ids: RecordIdSet,
    },
    /// Delete every record matched by id or predicate
    ConditionalRemove {
        /// Predicate arm of the matching rule
        query: Query,
        /// Identifier arm of the matching rule
        ids: RecordIdSet,
    },
}

impl Operation {
    /// Insert `records` in order, assigning consecutive identifiers above
    /// the table's maximum at apply time.
    pub fn bulk_insert(records: impl IntoIterator<Item = Record>) -> Self {
        Operation::BulkInsert {
            records: records.into_iter().collect(),
        }
    }

    /// Mutate every record whose identifier is in `ids` OR whose contents
    /// satisfy `query`.
    ///
    /// Pass [`Query::none()`] and an empty iterator for a no-op default:
    /// with both arms empty, nothing matches. The id set is collected
    /// fresh for every construction.
    pub fn update(
        mutator: Mutator,
        query: Query,
        ids: impl IntoIterator<Item = RecordId>,
    ) -> Self {
        Operation::ConditionalUpdate {
            mutator,
            query,
            ids: ids.into_iter().collect(),
        }
    }

    /// Delete every record whose identifier is in `ids` OR whose contents
    /// satisfy `query`.
    pub fn remove(query: Query, ids: impl IntoIterator<Item = RecordId>) -> Self {
        Operation::ConditionalRemove {
            query,
            ids: ids.into_iter().collect(),
        }
    }

    /// Apply this operation to a record mapping in place.
    ///
    /// Never fails for any table state.
    pub fn perform(&self, table: &mut TableData) {
        match self {
            Operation::BulkInsert { records } => {
                let mut next = max_id(table);
                for record in records {
                    next += 1;
                    table.insert(RecordId::new(next), record.clone());
                }
            }
            Operation::ConditionalUpdate { mutator, query, ids } => {
                for (id, record) in table.iter_mut() {
                    if ids.contains(id) || query.matches(record) {
                        mutator.apply(record);
                    }
                }
            }
            Operation::ConditionalRemove { query, ids } => {
                // Materialize the matching keys before deleting; the live
                // map cannot be modified while it is being iterated.
                let matched: Vec<RecordId> = table
                    .iter()
                    .filter(|&(id, record)| ids.contains(id) || query.matches(record))
                    .map(|(id, _)| *id)
                    .collect();
                for id in matched {
                    table.remove(&id);
                }
            }
        }
    }
}
