//! In-process table store for tests and demos.
//!
//! Implements the same contract as the hosted datastore: rows are JSON
//! objects, the store assigns `id` and `created_at` on insert, and the two
//! directory tables carry a natural-key uniqueness constraint on `name`.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::{Filter, Query, StoreError, Table, TableStore};

/// An in-memory table store.
///
/// Every operation takes the internal lock for its full duration, matching
/// the single-row atomicity the hosted store provides natively.
///
/// # Panics
///
/// Operations panic if the internal lock is poisoned, which can only happen
/// after a panic inside the store itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Table, Vec<Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn has_unique_name(table: Table) -> bool {
        matches!(table, Table::Admins | Table::Interns)
    }
}

impl TableStore for MemoryStore {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Value>, StoreError> {
        let tables = self.tables.lock().expect("memory store lock poisoned");
        let mut rows: Vec<Value> = tables
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filter.as_ref().is_none_or(|f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = query.order {
            rows.sort_by(|a, b| {
                let left = timestamp(a, order.column);
                let right = timestamp(b, order.column);
                if order.descending {
                    right.cmp(&left)
                } else {
                    left.cmp(&right)
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, table: Table, row: Value) -> Result<Value, StoreError> {
        let Value::Object(fields) = row else {
            return Err(StoreError::Decode("row must be a JSON object".to_string()));
        };
        let mut fields: Map<String, Value> = fields;

        let mut tables = self.tables.lock().expect("memory store lock poisoned");
        let rows = tables.entry(table).or_default();

        if Self::has_unique_name(table)
            && let Some(name) = fields.get("name")
            && rows.iter().any(|existing| existing.get("name") == Some(name))
        {
            return Err(StoreError::Conflict(format!(
                "duplicate name in {table}: {name}"
            )));
        }

        fields
            .entry("id".to_string())
            .or_insert_with(|| json!(Uuid::new_v4()));
        fields
            .entry("created_at".to_string())
            .or_insert_with(|| json!(Utc::now()));

        let stored = Value::Object(fields);
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        table: Table,
        filter: Filter,
        patch: Value,
    ) -> Result<Vec<Value>, StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::Decode("patch must be a JSON object".to_string()));
        };

        let mut tables = self.tables.lock().expect("memory store lock poisoned");
        let rows = tables.entry(table).or_default();

        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|row| filter.matches(row)) {
            if let Value::Object(fields) = row {
                for (key, value) in &patch {
                    fields.insert(key.clone(), value.clone());
                }
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn delete(&self, table: Table, filter: Filter) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().expect("memory store lock poisoned");
        let rows = tables.entry(table).or_default();

        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        Ok((before - rows.len()) as u64)
    }
}

/// Parse a row's timestamp column for ordering; rows without one sort first.
fn timestamp(row: &Value, column: &str) -> Option<DateTime<Utc>> {
    row.get(column)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
