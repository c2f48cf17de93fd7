//! Validated display names.
//!
//! Login and directory membership are keyed by name alone, so the only
//! validation the portal performs anywhere is "non-empty after trimming".
//! `DisplayName` captures that rule once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a display name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// The name was empty (or whitespace only).
    #[error("name must not be empty")]
    Empty,
}

/// A trimmed, non-empty display name.
///
/// Used for directory entries (admins and interns) and for the name typed at
/// login. Uniqueness across the directory is a store-level concern, not a
/// property of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Parse and validate a display name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if the trimmed input is empty.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let name = DisplayName::parse("  Priya  ").expect("valid name");
        assert_eq!(name.as_str(), "Priya");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(DisplayName::parse(""), Err(NameError::Empty));
        assert_eq!(DisplayName::parse("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_serde_transparent() {
        let name = DisplayName::parse("Marco").expect("valid name");
        assert_eq!(
            serde_json::to_string(&name).expect("serialize"),
            "\"Marco\""
        );
    }
}
