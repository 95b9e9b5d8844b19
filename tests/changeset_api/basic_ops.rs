//! Basic changeset operations against a live table.

use crate::common::*;
use ledgerdb::prelude::*;

// ============================================================================
// Inserts
// ============================================================================

#[test]
fn insert_two_records_into_empty_table() {
    let t = TestTable::new();

    let mut changeset = t.table.changeset();
    changeset.insert_multiple([rec(serde_json::json!({"a": 1})), rec(serde_json::json!({"a": 2}))]);
    changeset.execute().unwrap();

    assert_eq!(
        t.contents(),
        vec![
            (1, rec(serde_json::json!({"a": 1}))),
            (2, rec(serde_json::json!({"a": 2}))),
        ]
    );
}

#[test]
fn insert_empty_batch_leaves_table_unchanged() {
    let t = TestTable::with_records([rec(serde_json::json!({"a": 1}))]);

    let mut changeset = t.table.changeset();
    changeset.insert_multiple([]);
    changeset.execute().unwrap();

    assert_eq!(t.table.len(), 1);
}

#[test]
fn ids_continue_from_max_across_changesets() {
    let t = TestTable::with_records([rec(serde_json::json!({"n": 1}))]);

    let mut changeset = t.table.changeset();
    changeset.insert(rec(serde_json::json!({"n": 2})));
    changeset.execute().unwrap();

    assert!(t.table.contains(RecordId::new(2)));
    assert_eq!(t.table.len(), 2);
}

#[test]
fn ids_are_not_backfilled_after_removal() {
    let t = TestTable::with_records([
        rec(serde_json::json!({"n": 1})),
        rec(serde_json::json!({"n": 2})),
        rec(serde_json::json!({"n": 3})),
    ]);

    // Remove the middle record, then insert: the gap at 2 stays
    let mut changeset = t.table.changeset();
    changeset.remove_ids([RecordId::new(2)]);
    changeset.execute().unwrap();

    let mut changeset = t.table.changeset();
    changeset.insert(rec(serde_json::json!({"n": 4})));
    changeset.execute().unwrap();

    let ids: Vec<u64> = t.contents().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

// ============================================================================
// Updates
// ============================================================================

#[test]
fn update_by_predicate_mutates_matches_only() {
    let t = TestTable::with_records([
        rec(serde_json::json!({"n": 5})),
        rec(serde_json::json!({"n": 9})),
    ]);

    let mut changeset = t.table.changeset();
    changeset.update_where(
        Query::new(|r: &Record| r.get("n").and_then(|v| v.as_int()).map_or(false, |n| n > 5)),
        Mutator::new(|r: &mut Record| {
            let n = r.get("n").and_then(|v| v.as_int()).unwrap();
            r.set("n", Value::Int(n + 1));
        }),
    );
    changeset.execute().unwrap();

    assert_eq!(
        t.contents(),
        vec![
            (1, rec(serde_json::json!({"n": 5}))),
            (2, rec(serde_json::json!({"n": 10}))),
        ]
    );
}

#[test]
fn update_preserves_identifiers() {
    let t = TestTable::with_records([rec(serde_json::json!({"n": 1}))]);

    let mut changeset = t.table.changeset();
    changeset.update_ids([RecordId::new(1)], Mutator::set("n", Value::Int(100)));
    changeset.execute().unwrap();

    assert_eq!(t.table.len(), 1);
    assert_eq!(
        t.table.get(RecordId::new(1)),
        Some(rec(serde_json::json!({"n": 100})))
    );
}

// ============================================================================
// Removes
// ============================================================================

#[test]
fn remove_by_id() {
    let t = TestTable::with_records([
        rec(serde_json::json!({"x": 1})),
        rec(serde_json::json!({"x": 2})),
    ]);

    let mut changeset = t.table.changeset();
    changeset.remove_ids([RecordId::new(1)]);
    changeset.execute().unwrap();

    assert_eq!(t.contents(), vec![(2, rec(serde_json::json!({"x": 2})))]);
}

#[test]
fn remove_by_predicate() {
    let t = TestTable::with_records([
        rec(serde_json::json!({"keep": true})),
        rec(serde_json::json!({"keep": false})),
        rec(serde_json::json!({"keep": false})),
    ]);

    let mut changeset = t.table.changeset();
    changeset.remove_where(Query::new(|r: &Record| {
        r.get("keep").and_then(|v| v.as_bool()) == Some(false)
    }));
    changeset.execute().unwrap();

    assert_eq!(t.table.len(), 1);
    assert!(t.table.contains(RecordId::new(1)));
}

// ============================================================================
// Reads after execute
// ============================================================================

#[test]
fn reads_observe_fresh_state_after_execute() {
    let t = TestTable::with_records([rec(serde_json::json!({"n": 1}))]);

    // Warm the snapshot cache
    assert_eq!(t.table.all().len(), 1);

    let mut changeset = t.table.changeset();
    changeset.insert(rec(serde_json::json!({"n": 2})));
    changeset.execute().unwrap();

    // Invalidation means the next read rebuilds, not serves the old view
    assert_eq!(t.table.all().len(), 2);
    let hits = t.table.search(&Query::new(|r: &Record| {
        r.get("n").and_then(|v| v.as_int()) == Some(2)
    }));
    assert_eq!(hits.len(), 1);
}
