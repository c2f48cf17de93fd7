//! Task operations: assignment and completion tracking.

use serde_json::json;
use tracing::info;

use intrasphere_core::{InternId, TaskId, TaskStatus};

use crate::error::PortalError;
use crate::models::{Intern, Task, TaskWithIntern};
use crate::store::{Filter, Order, Query, Table, TableStore};

use super::{UNKNOWN_INTERN_LABEL, decode_row, decode_rows};

/// Repository for the tasks table.
pub struct TaskRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: TableStore> TaskRepository<'a, S> {
    /// Create a new task repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Assign a new task to an intern. Tasks always start `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidInput`] if the title is empty after
    /// trimming or the intern id does not resolve, or [`PortalError::Store`]
    /// if a datastore call fails.
    pub async fn assign(&self, title: &str, intern_id: InternId) -> Result<Task, PortalError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PortalError::InvalidInput(
                "task title must not be empty".to_string(),
            ));
        }

        let owner = self
            .store
            .select(
                Table::Interns,
                Query::filtered(Filter::eq("id", intern_id.to_string())),
            )
            .await?;
        if owner.is_empty() {
            return Err(PortalError::InvalidInput(format!(
                "no intern with id {intern_id}"
            )));
        }

        let row = self
            .store
            .insert(
                Table::Tasks,
                json!({
                    "title": title,
                    "intern_id": intern_id,
                    "status": TaskStatus::Pending,
                }),
            )
            .await?;

        let task: Task = decode_row(row)?;
        info!(task_id = %task.id, intern_id = %intern_id, "task assigned");
        Ok(task)
    }

    /// Mark a task completed.
    ///
    /// The transition is unconditional; completing an already-completed
    /// task leaves it completed.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NotFound`] if the id does not resolve, or
    /// [`PortalError::Store`] if the datastore call fails.
    pub async fn complete(&self, id: TaskId) -> Result<Task, PortalError> {
        let updated = self
            .store
            .update(
                Table::Tasks,
                Filter::eq("id", id.to_string()),
                json!({ "status": TaskStatus::Completed }),
            )
            .await?;

        let task = decode_rows::<Task>(updated)?
            .into_iter()
            .next()
            .ok_or_else(|| PortalError::NotFound(format!("task {id}")))?;
        info!(task_id = %id, "task completed");
        Ok(task)
    }

    /// List an intern's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if the datastore call fails.
    pub async fn list_for_intern(&self, intern_id: InternId) -> Result<Vec<Task>, PortalError> {
        let rows = self
            .store
            .select(
                Table::Tasks,
                Query::filtered(Filter::eq("intern_id", intern_id.to_string()))
                    .order(Order::desc("created_at")),
            )
            .await?;
        decode_rows(rows)
    }

    /// List every task joined with its owner's display name, for the admin
    /// overview.
    ///
    /// Two-step fetch-then-resolve: a task whose owner no longer resolves
    /// (removed intern, orphaned row) gets the fallback label instead of
    /// failing the whole fetch.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if a datastore call fails.
    pub async fn list_all(&self) -> Result<Vec<TaskWithIntern>, PortalError> {
        let tasks: Vec<Task> = decode_rows(self.store.select(Table::Tasks, Query::all()).await?)?;
        let interns: Vec<Intern> =
            decode_rows(self.store.select(Table::Interns, Query::all()).await?)?;

        Ok(tasks
            .into_iter()
            .map(|task| {
                let intern_name = interns
                    .iter()
                    .find(|intern| intern.id == task.intern_id)
                    .map_or_else(|| UNKNOWN_INTERN_LABEL.to_string(), |i| i.name.clone());
                TaskWithIntern { task, intern_name }
            })
            .collect())
    }
}
