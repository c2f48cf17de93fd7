//! Directory rows: the two disjoint name-keyed identity sets.

use serde::{Deserialize, Serialize};

use intrasphere_core::{AdminId, InternId, Role};

use super::CurrentUser;

/// The founder-admin. Created out-of-band (seed data), immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
}

/// An intern. Created and removed by admin actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    pub id: InternId,
    pub name: String,
}

/// Result of a directory name lookup.
///
/// Lookup order is significant: admins are checked before interns, so a
/// name collision across the two sets resolves to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    Admin(Admin),
    Intern(Intern),
}

impl DirectoryEntry {
    /// The role-tagged session identity this entry logs in as.
    #[must_use]
    pub fn into_current_user(self) -> CurrentUser {
        match self {
            Self::Admin(admin) => CurrentUser {
                id: admin.id.as_uuid(),
                name: admin.name,
                role: Role::Admin,
            },
            Self::Intern(intern) => CurrentUser {
                id: intern.id.as_uuid(),
                name: intern.name,
                role: Role::Intern,
            },
        }
    }
}
