//! In-process data source with PostgREST query semantics.
//!
//! Backs unit, CLI and integration tests. Rows are kept per table in
//! insertion order, which plays the role of the backend's native row order.

use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::{DataSource, DataSourceError, Direction, Query, Table};

/// Shared, cloneable in-memory backend.
#[derive(Clone, Default)]
pub struct MemoryDataSource {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    tables: Mutex<HashMap<Table, Vec<Value>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    selects: AtomicUsize,
    inserts: AtomicUsize,
}

impl MemoryDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to a table, bypassing the failure switches.
    pub fn seed(&self, table: Table, rows: impl IntoIterator<Item = Value>) {
        let mut tables = self
            .inner
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tables.entry(table).or_default().extend(rows);
    }

    /// Snapshot of a table's rows in storage order.
    #[must_use]
    pub fn rows(&self, table: Table) -> Vec<Value> {
        let tables = self
            .inner
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tables.get(&table).cloned().unwrap_or_default()
    }

    /// Make every subsequent `select` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `insert` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `select` calls received, failed ones included.
    #[must_use]
    pub fn select_count(&self) -> usize {
        self.inner.selects.load(Ordering::SeqCst)
    }

    /// Number of `insert` calls received, failed ones included.
    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.inner.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn select(&self, query: &Query) -> Result<Vec<Value>, DataSourceError> {
        self.inner.selects.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(DataSourceError::Unavailable(format!(
                "simulated read failure on {}",
                query.table
            )));
        }

        let mut rows: Vec<Value> = self
            .rows(query.table)
            .into_iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|f| row.get(&f.column).unwrap_or(&Value::Null) == &f.value)
            })
            .collect();

        // Stable sort keeps storage order for rows that tie on every key.
        rows.sort_by(|a, b| {
            query
                .orderings
                .iter()
                .map(|o| {
                    let ord = compare_values(
                        a.get(&o.column).unwrap_or(&Value::Null),
                        b.get(&o.column).unwrap_or(&Value::Null),
                    );
                    match o.direction {
                        Direction::Ascending => ord,
                        Direction::Descending => ord.reverse(),
                    }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(CmpOrdering::Equal)
        });

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, table: Table, row: Value) -> Result<(), DataSourceError> {
        self.inner.inserts.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(DataSourceError::Api {
                status: 400,
                message: format!("simulated insert rejection on {table}"),
            });
        }
        self.seed(table, [row]);
        Ok(())
    }
}

/// Total order over JSON scalars, roughly matching Postgres defaults.
///
/// Nulls sort last in ascending order. Mixed types compare by type rank.
fn compare_values(a: &Value, b: &Value) -> CmpOrdering {
    match (a, b) {
        (Value::Null, Value::Null) => CmpOrdering::Equal,
        (Value::Null, _) => CmpOrdering::Greater,
        (_, Value::Null) => CmpOrdering::Less,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

const fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}
