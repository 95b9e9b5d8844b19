//! Query predicates
//!
//! A [`Query`] is a pure boolean test over a [`Record`], used by
//! conditional operations and by table search. The distinguished null
//! predicate matches nothing and is the default for operations constructed
//! without a query.

use crate::record::Record;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

type QueryFn = dyn Fn(&Record) -> bool + Send + Sync;

// The null predicate is stateless, so one shared instance is safe to hand
// out from every `Query::none()` call.
static NULL_QUERY: Lazy<Arc<QueryFn>> = Lazy::new(|| Arc::new(|_| false));

/// A pure predicate over records.
///
/// Queries are cheap to clone; the underlying closure is shared.
///
/// # Examples
///
/// ```
/// use ledger_core::query::Query;
/// use ledger_core::record::Record;
/// use ledger_core::value::Value;
///
/// let adults = Query::new(|r: &Record| {
///     r.get("age").and_then(|v| v.as_int()).map_or(false, |age| age >= 18)
/// });
///
/// let mut record = Record::new();
/// record.set("age", Value::Int(30));
/// assert!(adults.matches(&record));
///
/// // The null predicate matches nothing
/// assert!(!Query::none().matches(&record));
/// ```
#[derive(Clone)]
pub struct Query(Arc<QueryFn>);

impl Query {
    /// Wrap a predicate function
    pub fn new(f: impl Fn(&Record) -> bool + Send + Sync + 'static) -> Self {
        Query(Arc::new(f))
    }

    /// The null predicate: returns false for every record.
    ///
    /// Used as the default meaning "match no record by predicate,
    /// identifier-based matching only".
    pub fn none() -> Self {
        Query(Arc::clone(&NULL_QUERY))
    }

    /// Evaluate the predicate against a record
    pub fn matches(&self, record: &Record) -> bool {
        (self.0)(record)
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::none()
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Query(..)")
    }
}
