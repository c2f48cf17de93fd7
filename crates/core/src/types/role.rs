//! The two fixed roles of the portal.

use serde::{Deserialize, Serialize};

/// Role tag attached to a logged-in identity and to note senders.
///
/// The portal has exactly two roles: one founder-admin and any number of
/// interns. The role drives dashboard dispatch and sender labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Intern,
}

impl Role {
    /// Whether this identity is the founder-admin.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Intern => write!(f, "intern"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "intern" => Ok(Self::Intern),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_snake_case_serde() {
        assert_eq!(
            serde_json::to_string(&Role::Admin).expect("serialize"),
            "\"admin\""
        );
        let role: Role = serde_json::from_str("\"intern\"").expect("deserialize");
        assert_eq!(role, Role::Intern);
    }

    #[test]
    fn test_role_display_from_str_roundtrip() {
        for role in [Role::Admin, Role::Intern] {
            let parsed: Role = role.to_string().parse().expect("parse");
            assert_eq!(parsed, role);
        }
        assert!("founder".parse::<Role>().is_err());
    }
}
