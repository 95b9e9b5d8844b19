//! Convenience re-exports for the common working set.
//!
//! ```
//! use ledgerdb::prelude::*;
//!
//! let db = Ledger::new();
//! let table = db.table("events");
//! assert!(table.is_empty());
//! ```

pub use crate::{
    Changeset, Error, Ledger, Mutator, Operation, Query, Record, RecordId, RecordIdSet, Result,
    Table, Value,
};
