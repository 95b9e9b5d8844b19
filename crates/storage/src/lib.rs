//! In-memory storage engine for ledger tables.
//!
//! Provides [`MemTable`], the reference [`TableStorage`] binding: a
//! lock-guarded record mapping with a version counter and a cached
//! snapshot for reads.
//!
//! [`TableStorage`]: ledger_core::traits::TableStorage

mod table;

pub use table::{MemTable, MemTableBuilder, Snapshot};
