//! Changeset engine for ledger tables.
//!
//! Callers accumulate mutation commands (bulk inserts, conditional
//! updates, conditional removes) into a [`Changeset`] bound to a table
//! handle, then apply the whole batch with one atomic
//! [`execute`](Changeset::execute) call.

mod changeset;
mod operation;

pub use changeset::Changeset;
pub use operation::{Mutator, Operation};

// The engine speaks the core vocabulary; re-export the working set so
// downstream code can depend on this crate alone.
pub use ledger_core::{Error, Query, Record, RecordId, RecordIdSet, Result, TableStorage, Value};
