//! Unified error handling for the portal.
//!
//! The taxonomy mirrors what the views need to distinguish: bad input,
//! missing entities, directory constraint violations, and the backing store
//! being unavailable for any reason. Every failure is terminal at the view
//! boundary - surfaced once as a transient notice, never retried.

use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// A required field was empty or did not resolve.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An id did not resolve to an existing entity.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Directory add constraint violation (duplicate or invalid name).
    #[error("Duplicate or invalid: {0}")]
    DuplicateOrInvalid(String),

    /// The underlying datastore call failed.
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl PortalError {
    /// The message shown to the user in a transient notice.
    ///
    /// Store internals are not exposed; everything else is already phrased
    /// for the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(_) => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
