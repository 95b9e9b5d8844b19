//! # Ledger
//!
//! Embedded in-memory tables with atomic changesets.
//!
//! A [`Ledger`] holds named tables of structured records. Mutations are
//! never applied one at a time: callers record bulk inserts, conditional
//! updates, and conditional removes into a [`Changeset`], then apply the
//! whole batch with one atomic [`execute`](Changeset::execute) call.
//!
//! ## Quick Start
//!
//! ```
//! use ledgerdb::prelude::*;
//!
//! let db = Ledger::new();
//! let users = db.table("users");
//!
//! // Record a batch of changes
//! let mut changeset = users.changeset();
//! changeset.insert_multiple([
//!     Record::try_from(serde_json::json!({"name": "alice", "age": 30}))?,
//!     Record::try_from(serde_json::json!({"name": "bob", "age": 17}))?,
//! ]);
//! changeset.remove_where(Query::new(|r: &Record| {
//!     r.get("age").and_then(|v| v.as_int()).map_or(false, |age| age < 18)
//! }));
//!
//! // Apply it atomically
//! changeset.execute()?;
//! assert_eq!(users.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Semantics
//!
//! - Operations execute in append order; later operations in a changeset
//!   see the effects of earlier ones.
//! - Inserted records receive consecutive integer identifiers above the
//!   table's maximum at apply time, starting at 1 for an empty table.
//! - Conditional operations match a record when its identifier is in the
//!   given id set OR the predicate accepts its contents.
//! - `execute` is not idempotent; running a changeset twice re-applies
//!   every recorded operation.

#![warn(missing_docs)]

mod database;
mod table;

pub mod prelude;

// Re-export main entry points
pub use database::Ledger;
pub use table::Table;

// Re-export the engine and core vocabulary
pub use ledger_core::{
    Error, Query, Record, RecordId, RecordIdSet, Result, TableData, TableStorage, Transform, Value,
};
pub use ledger_engine::{Changeset, Mutator, Operation};
pub use ledger_storage::{MemTable, MemTableBuilder, Snapshot};
