//! The table-query boundary.
//!
//! Everything the portal persists goes through [`TableStore`]: a generic
//! interface over the four logical tables of the hosted datastore, exposing
//! select-with-filter, insert, update-with-filter, delete-with-filter,
//! equality and OR filter combinators, and ordering by a timestamp column.
//! Rows cross the boundary as structured JSON with nullable fields
//! represented explicitly.
//!
//! Two implementations:
//!
//! - [`RestStore`] - the hosted table-query API, spoken with PostgREST-style
//!   conventions over HTTP
//! - [`MemoryStore`] - an in-process store for tests and demos

pub mod filter;
pub mod memory;
pub mod rest;

use serde_json::Value;
use thiserror::Error;

pub use filter::{Filter, Order};
pub use memory::MemoryStore;
pub use rest::RestStore;

/// The logical tables of the portal datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Admins,
    Interns,
    Tasks,
    Notes,
}

impl Table {
    /// Wire name of the table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admins => "admins",
            Self::Interns => "interns",
            Self::Tasks => "tasks",
            Self::Notes => "notes",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur when talking to the backing datastore.
///
/// Everything here surfaces to the application as the single
/// "store unavailable" class; the variants exist for logging and for
/// recognizing natural-key conflicts.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The datastore returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Natural-key constraint violation (e.g. duplicate directory name).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A response could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// A select query: an optional row filter plus an optional ordering.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
}

impl Query {
    /// Select every row of the table.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            filter: None,
            order: None,
        }
    }

    /// Select rows matching `filter`.
    #[must_use]
    pub const fn filtered(filter: Filter) -> Self {
        Self {
            filter: Some(filter),
            order: None,
        }
    }

    /// Apply an ordering to the result set.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

/// Generic table-query interface to the backing datastore.
///
/// The portal's repositories are written against this trait; the only
/// requirements are the combinators the hosted API provides.
/// Single-row operations are atomic at the store; multi-row consistency is
/// not guaranteed and callers treat dependent writes as independent calls.
pub trait TableStore {
    /// Fetch rows matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying call fails.
    fn select(
        &self,
        table: Table,
        query: Query,
    ) -> impl Future<Output = Result<Vec<Value>, StoreError>>;

    /// Insert one row, returning it as stored (with assigned `id` and
    /// `created_at`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] on a natural-key violation, or
    /// another [`StoreError`] if the underlying call fails.
    fn insert(&self, table: Table, row: Value)
    -> impl Future<Output = Result<Value, StoreError>>;

    /// Apply a patch to every row matching the filter, returning the updated
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying call fails.
    fn update(
        &self,
        table: Table,
        filter: Filter,
        patch: Value,
    ) -> impl Future<Output = Result<Vec<Value>, StoreError>>;

    /// Delete every row matching the filter, returning how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying call fails.
    fn delete(
        &self,
        table: Table,
        filter: Filter,
    ) -> impl Future<Output = Result<u64, StoreError>>;
}
