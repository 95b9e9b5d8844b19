//! The execute contract with the storage collaborator.

use crate::common::*;
use ledgerdb::prelude::*;
use ledgerdb::{MemTable, TableData, TableStorage, Transform};
use std::sync::Mutex;
use std::time::Duration;

/// Collaborator double recording the primitive call sequence.
struct ProbeStorage {
    calls: Mutex<Vec<&'static str>>,
    fail_update: bool,
}

impl ProbeStorage {
    fn new() -> Self {
        ProbeStorage {
            calls: Mutex::new(Vec::new()),
            fail_update: false,
        }
    }

    fn failing() -> Self {
        ProbeStorage {
            fail_update: true,
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TableStorage for ProbeStorage {
    fn atomic_update(&self, transform: Transform<'_>) -> Result<()> {
        self.calls.lock().unwrap().push("atomic_update");
        if self.fail_update {
            return Err(Error::Storage("injected failure".to_string()));
        }
        let mut data = TableData::new();
        transform(&mut data);
        Ok(())
    }

    fn invalidate_cache(&self) {
        self.calls.lock().unwrap().push("invalidate_cache");
    }
}

#[test]
fn execute_calls_each_primitive_exactly_once_in_order() {
    init_tracing();
    let storage = ProbeStorage::new();

    let mut changeset = Changeset::new(&storage);
    changeset.insert(rec(serde_json::json!({"n": 1})));
    changeset.insert(rec(serde_json::json!({"n": 2})));
    changeset.remove_ids([RecordId::new(1)]);
    changeset.execute().unwrap();

    assert_eq!(storage.calls(), vec!["atomic_update", "invalidate_cache"]);
}

#[test]
fn empty_changeset_still_runs_both_primitives() {
    init_tracing();
    let storage = ProbeStorage::new();

    Changeset::new(&storage).execute().unwrap();

    assert_eq!(storage.calls(), vec!["atomic_update", "invalidate_cache"]);
}

#[test]
fn collaborator_failure_propagates_unmodified() {
    init_tracing();
    let storage = ProbeStorage::failing();

    let mut changeset = Changeset::new(&storage);
    changeset.insert(rec(serde_json::json!({"n": 1})));

    let err = changeset.execute().unwrap_err();
    assert_eq!(err.to_string(), "storage error: injected failure");
    // No cache invalidation after a failed update
    assert_eq!(storage.calls(), vec!["atomic_update"]);
}

#[test]
fn lock_timeout_from_the_in_memory_binding() {
    init_tracing();
    let table = std::sync::Arc::new(
        MemTable::builder()
            .name("contended")
            .lock_timeout(Duration::from_millis(20))
            .build(),
    );

    // Pin the write lock on another thread via a slow transform
    let held = std::sync::Arc::clone(&table);
    let holder = std::thread::spawn(move || {
        held.atomic_update(Box::new(|_| {
            std::thread::sleep(Duration::from_millis(200));
        }))
        .unwrap();
    });
    std::thread::sleep(Duration::from_millis(40));

    let mut changeset = Changeset::new(table.as_ref());
    changeset.insert(rec(serde_json::json!({"n": 1})));
    let err = changeset.execute().unwrap_err();

    assert!(matches!(err, Error::LockTimeout(_)));
    assert!(err.is_retryable());
    holder.join().unwrap();
}
