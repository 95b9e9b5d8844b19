//! Core types for ledger tables and changesets.
//!
//! This crate defines the value and record model, record identifiers, the
//! query predicate wrapper, shared error types, and the [`TableStorage`]
//! contract a storage engine implements for the changeset engine.

pub mod error;
pub mod query;
pub mod record;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use query::Query;
pub use record::Record;
pub use traits::{TableStorage, Transform};
pub use types::{max_id, RecordId, RecordIdSet, TableData};
pub use value::Value;
