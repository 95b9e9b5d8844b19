//! Core types for tables and changesets
//!
//! This module defines the fundamental types used throughout the system:
//! - [`RecordId`]: integer key uniquely naming a record within a table
//! - [`TableData`]: the record mapping owned by the storage collaborator
//! - [`RecordIdSet`]: explicit identifier sets for conditional operations

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Integer key uniquely identifying a record within a table.
///
/// Identifiers are assigned during bulk insertion, monotonically increasing
/// from the maximum identifier present in the table at apply time. Once
/// assigned to a record, an identifier never changes.
///
/// # Examples
///
/// ```
/// use ledger_core::types::RecordId;
///
/// let id = RecordId::new(1);
/// assert_eq!(id.as_u64(), 1);
/// assert!(id < RecordId::new(2));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(u64);

impl RecordId {
    /// Create a record id from a raw integer
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }

    /// Get the raw integer value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record mapping owned by the storage collaborator.
///
/// A `BTreeMap` keeps records ordered by identifier, which makes the
/// current maximum an O(log n) lookup and gives deterministic iteration.
pub type TableData = BTreeMap<RecordId, Record>;

/// A set of record identifiers targeted by a conditional operation.
///
/// Operation constructors always collect into a fresh set; no default
/// instance is ever shared between constructions.
pub type RecordIdSet = rustc_hash::FxHashSet<RecordId>;

/// Current maximum identifier in a table, or zero when empty.
///
/// The base value for identifier assignment: bulk inserts hand out
/// `max_id(table) + 1, +2, ...` in input order. Gaps below the maximum are
/// never backfilled.
///
/// # Examples
///
/// ```
/// use ledger_core::types::{max_id, RecordId, TableData};
/// use ledger_core::record::Record;
///
/// let mut table = TableData::new();
/// assert_eq!(max_id(&table), 0);
///
/// table.insert(RecordId::new(7), Record::new());
/// assert_eq!(max_id(&table), 7);
/// ```
pub fn max_id(table: &TableData) -> u64 {
    table
        .last_key_value()
        .map(|(id, _)| id.as_u64())
        .unwrap_or(0)
}
