//! Status enums for portal entities.

use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// Tasks are created `pending` and move one-way to `completed`; there is no
/// reopening path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Whether the task has been finished by its owner.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
        assert!(!TaskStatus::default().is_completed());
    }

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).expect("serialize"),
            "\"completed\""
        );
        let status: TaskStatus = serde_json::from_str("\"pending\"").expect("deserialize");
        assert_eq!(status, TaskStatus::Pending);
    }
}
