//! Session identity and the client-held session slot.
//!
//! The session is a single key-value slot: set at login, cleared at logout,
//! no expiry policy. It is modeled as explicit context passed into each
//! view rather than ambient global state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use intrasphere_core::Role;

/// The logged-in identity, derived from a successful directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// Session keys for client-held state.
pub mod keys {
    /// Key for the single session slot holding the current user.
    pub const SESSION_USER: &str = "team_intrasphere_user";
}

/// The client-held session slot.
///
/// `LoggedOut` is the empty slot; a successful login fills it and logout
/// clears it unconditionally.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSlot {
    current: Option<CurrentUser>,
}

impl SessionSlot {
    /// An empty (logged-out) slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Store a logged-in identity.
    pub fn set(&mut self, user: CurrentUser) {
        self.current = Some(user);
    }

    /// Clear the slot. Logout always succeeds.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The current identity, if logged in.
    #[must_use]
    pub const fn current(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lifecycle() {
        let mut slot = SessionSlot::new();
        assert!(slot.current().is_none());

        slot.set(CurrentUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            role: Role::Admin,
        });
        assert_eq!(slot.current().map(|u| u.role), Some(Role::Admin));

        slot.clear();
        assert!(slot.current().is_none());

        // Clearing an empty slot is fine
        slot.clear();
        assert!(slot.current().is_none());
    }
}
