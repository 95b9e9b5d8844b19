//! Storage collaborator contract
//!
//! The changeset engine needs exactly two primitives from a storage
//! engine: an atomic "replace the table's record set via a transform
//! function" and a "derived caches are now stale" signal. Everything else
//! a backend offers (reads, persistence, its own query layer) is outside
//! this contract.

use crate::error::Result;
use crate::types::TableData;

/// A transform applied to the table's record mapping inside one atomic
/// update. The borrow lets the transform close over caller state (the
/// changeset's recorded operations).
pub type Transform<'a> = Box<dyn FnOnce(&mut TableData) + 'a>;

/// The minimal contract a storage engine must provide to changesets.
///
/// # Atomicity
///
/// `atomic_update` applies the transform as a single unit of work relative
/// to other concurrent callers of the same primitive: no other
/// `atomic_update` call may observe an intermediate state of the
/// transform. How that is achieved (a write lock, a single-writer thread,
/// an MVCC commit) is the implementation's business; the changeset core
/// holds no locks of its own.
///
/// # Cache invalidation
///
/// `invalidate_cache` tells the engine that any cached views derived from
/// the table are stale and must be recomputed on next read. Changesets
/// call it exactly once per `execute`, after the atomic update returns.
pub trait TableStorage {
    /// Apply `transform` to the current record mapping as one atomic unit.
    ///
    /// Failures (lock timeouts, backend I/O) propagate to the caller
    /// unmodified; the transform itself does not fail.
    fn atomic_update(&self, transform: Transform<'_>) -> Result<()>;

    /// Mark cached views derived from the table as stale.
    fn invalidate_cache(&self);
}
