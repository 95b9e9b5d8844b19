//! Shared helpers for the changeset API suite.

use ledgerdb::prelude::*;

/// Install a test-writer subscriber once per process; later calls are a
/// no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Build a record from a JSON object literal.
pub fn rec(json: serde_json::Value) -> Record {
    Record::try_from(json).expect("test records are JSON objects")
}

/// A fresh single-table database for one test.
pub struct TestTable {
    _db: Ledger,
    pub table: Table,
}

impl TestTable {
    pub fn new() -> Self {
        init_tracing();
        let db = Ledger::new();
        let table = db.table("test");
        TestTable { _db: db, table }
    }

    /// Seed the table with records via one changeset.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let t = Self::new();
        let mut changeset = t.table.changeset();
        changeset.insert_multiple(records);
        changeset.execute().unwrap();
        t
    }

    /// Current table contents as (raw id, record) pairs.
    pub fn contents(&self) -> Vec<(u64, Record)> {
        self.table
            .all()
            .iter()
            .map(|(id, r)| (id.as_u64(), r.clone()))
            .collect()
    }
}
