//! Task rows and their admin-view join.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intrasphere_core::{InternId, TaskId, TaskStatus};

/// A task owned by exactly one intern.
///
/// Created `pending` by the admin; mutated only by the owning intern, one
/// way, to `completed`. Deleted only as a side effect of intern removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub intern_id: InternId,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// A task joined with its owner's display name for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskWithIntern {
    #[serde(flatten)]
    pub task: Task,
    /// Owner display name; the fallback label when the owner no longer
    /// resolves (e.g. the intern was removed).
    pub intern_name: String,
}
