//! Per-entity repositories over the table-query boundary.
//!
//! Each repository borrows a [`TableStore`](crate::store::TableStore) and
//! owns the access rules for one logical table:
//!
//! - [`DirectoryRepository`] - admins and interns (login lookup, add/remove)
//! - [`TaskRepository`] - task assignment and completion
//! - [`NoteRepository`] - the messaging feed and its visibility rules

pub mod directory;
pub mod notes;
pub mod tasks;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PortalError;
use crate::store::StoreError;

pub use directory::DirectoryRepository;
pub use notes::{NoteRepository, resolve_senders};
pub use tasks::TaskRepository;

/// Display label for admin-authored notes.
pub const FOUNDER_LABEL: &str = "Founder";

/// Fallback label when a sender or owner id no longer resolves to an intern.
pub const UNKNOWN_INTERN_LABEL: &str = "Unknown Intern";

/// Decode a wire row into a domain type.
fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, PortalError> {
    serde_json::from_value(row)
        .map_err(|e| PortalError::Store(StoreError::Decode(e.to_string())))
}

/// Decode a set of wire rows into domain types.
fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, PortalError> {
    rows.into_iter().map(decode_row).collect()
}
