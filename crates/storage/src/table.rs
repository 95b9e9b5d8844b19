//! In-memory table binding
//!
//! [`MemTable`] is the reference implementation of the
//! [`TableStorage`] contract: a `RwLock`-guarded record mapping with a
//! monotonic version counter and a cached materialized snapshot serving
//! the read API.
//!
//! # Thread Safety
//!
//! All operations are thread-safe. Concurrent `atomic_update` calls are
//! serialized by the write lock; readers share the read lock. The cached
//! snapshot is guarded by its own mutex and is only ever rebuilt under the
//! read lock, so a transform in flight can never leak an intermediate
//! state into the cache.

use ledger_core::error::{Error, Result};
use ledger_core::query::Query;
use ledger_core::record::Record;
use ledger_core::traits::{TableStorage, Transform};
use ledger_core::types::{RecordId, TableData};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// A materialized, identifier-ordered view of the whole table.
pub type Snapshot = Arc<Vec<(RecordId, Record)>>;

/// In-memory table guarded by a read-write lock.
///
/// # Example
///
/// ```
/// use ledger_storage::MemTable;
///
/// let table = MemTable::new("events");
/// assert_eq!(table.name(), "events");
/// assert!(table.is_empty());
/// ```
pub struct MemTable {
    /// Table name, used in log events
    name: String,
    /// The record mapping; exclusively owned, handed to transforms as a
    /// transient mutable view
    data: RwLock<TableData>,
    /// Cached snapshot serving `all()` and `search()`; cleared by
    /// `invalidate_cache`
    snapshot: Mutex<Option<Snapshot>>,
    /// Bumped once per successful atomic update
    version: AtomicU64,
    /// Bound on write-lock acquisition; `None` blocks indefinitely
    lock_timeout: Option<Duration>,
}

impl MemTable {
    /// Create an empty table with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    /// Create a builder for table configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use ledger_storage::MemTable;
    /// use std::time::Duration;
    ///
    /// let table = MemTable::builder()
    ///     .name("events")
    ///     .lock_timeout(Duration::from_millis(50))
    ///     .build();
    /// ```
    pub fn builder() -> MemTableBuilder {
        MemTableBuilder::new()
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of atomic updates applied so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Get a record by identifier.
    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.data.read().get(&id).cloned()
    }

    /// Check whether an identifier is present.
    pub fn contains(&self, id: RecordId) -> bool {
        self.data.read().contains_key(&id)
    }

    /// All records, ordered by identifier.
    ///
    /// The snapshot is materialized once and cached until the next
    /// `invalidate_cache` call; repeated reads between updates are cheap.
    pub fn all(&self) -> Snapshot {
        let mut cache = self.snapshot.lock();
        if let Some(snap) = cache.as_ref() {
            return Arc::clone(snap);
        }

        let data = self.data.read();
        let snap: Snapshot = Arc::new(data.iter().map(|(id, r)| (*id, r.clone())).collect());
        *cache = Some(Arc::clone(&snap));
        trace!(table = %self.name, records = snap.len(), "snapshot materialized");
        snap
    }

    /// Records matching a query predicate, ordered by identifier.
    pub fn search(&self, query: &Query) -> Vec<(RecordId, Record)> {
        self.all()
            .iter()
            .filter(|(_, record)| query.matches(record))
            .cloned()
            .collect()
    }
}

impl TableStorage for MemTable {
    fn atomic_update(&self, transform: Transform<'_>) -> Result<()> {
        let mut data = match self.lock_timeout {
            Some(timeout) => self
                .data
                .try_write_for(timeout)
                .ok_or(Error::LockTimeout(timeout))?,
            None => self.data.write(),
        };

        transform(&mut data);
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(table = %self.name, version, records = data.len(), "atomic update applied");
        Ok(())
    }

    fn invalidate_cache(&self) {
        *self.snapshot.lock() = None;
        trace!(table = %self.name, "snapshot cache invalidated");
    }
}

impl std::fmt::Debug for MemTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemTable")
            .field("name", &self.name)
            .field("records", &self.len())
            .field("version", &self.version())
            .finish()
    }
}

/// Builder for [`MemTable`] configuration.
#[derive(Debug, Default)]
pub struct MemTableBuilder {
    name: Option<String>,
    lock_timeout: Option<Duration>,
}

impl MemTableBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table name (defaults to `"default"`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bound write-lock acquisition; an update that cannot take the lock
    /// within `timeout` fails with [`Error::LockTimeout`].
    pub fn lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = Some(timeout);
        self
    }

    /// Build the table.
    pub fn build(self) -> MemTable {
        MemTable {
            name: self.name.unwrap_or_else(|| "default".to_string()),
            data: RwLock::new(TableData::new()),
            snapshot: Mutex::new(None),
            version: AtomicU64::new(0),
            lock_timeout: self.lock_timeout,
        }
    }
}
