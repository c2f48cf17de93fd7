//! Login error types.

use thiserror::Error;

use crate::error::PortalError;

/// Errors that can occur during the login flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The name matched neither an admin nor an intern.
    #[error("user not found")]
    UserNotFound,

    /// The directory lookup itself failed.
    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl AuthError {
    /// The message shown to the user on the login screen.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UserNotFound => "User not found. Please contact the founder.".to_string(),
            Self::EmptyName => self.to_string(),
            Self::Portal(e) => e.user_message(),
        }
    }
}
