//! The intern dashboard.

use tracing::debug;

use intrasphere_core::{InternId, Role, TaskId};

use crate::db::{FOUNDER_LABEL, NoteRepository, TaskRepository};
use crate::error::PortalError;
use crate::models::{CurrentUser, Note, Task};
use crate::store::TableStore;

use super::Notice;

/// An intern's view: their own tasks, plus the feed of notes addressed to
/// them, broadcasts, and their own sent notes.
pub struct InternView<'a, S> {
    store: &'a S,
    user: CurrentUser,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub notices: Vec<Notice>,
    sending_note: bool,
}

impl<'a, S: TableStore> InternView<'a, S> {
    /// Open the dashboard and fetch the initial snapshot.
    pub async fn open(store: &'a S, user: CurrentUser) -> Self {
        let mut view = Self {
            store,
            user,
            tasks: Vec::new(),
            notes: Vec::new(),
            notices: Vec::new(),
            sending_note: false,
        };
        view.refresh().await;
        view
    }

    /// The logged-in intern.
    #[must_use]
    pub const fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn intern_id(&self) -> InternId {
        InternId::new(self.user.id)
    }

    /// Refetch the full read set. On failure the previous snapshot stays in
    /// place and an error notice is pushed.
    pub async fn refresh(&mut self) {
        match self.fetch_snapshot().await {
            Ok((tasks, notes)) => {
                self.tasks = tasks;
                self.notes = notes;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    async fn fetch_snapshot(&self) -> Result<(Vec<Task>, Vec<Note>), PortalError> {
        let tasks = TaskRepository::new(self.store)
            .list_for_intern(self.intern_id())
            .await?;
        let notes = NoteRepository::new(self.store)
            .intern_inbox(self.intern_id())
            .await?;
        Ok((tasks, notes))
    }

    /// Mark one of the intern's own tasks completed.
    pub async fn complete_task(&mut self, id: TaskId) {
        match TaskRepository::new(self.store).complete(id).await {
            Ok(_) => {
                self.notices.push(Notice::success("Task completed!"));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    /// Send a note to the founder.
    ///
    /// Guarded by an in-flight flag: a second send issued before the first
    /// completes is dropped rather than sequenced.
    pub async fn send_note(&mut self, content: &str) {
        if self.sending_note {
            debug!("note send already in flight, dropping");
            return;
        }
        self.sending_note = true;

        match NoteRepository::new(self.store)
            .send_from_intern(self.intern_id(), content)
            .await
        {
            Ok(_) => {
                self.notices.push(Notice::success("Note sent to founder"));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }

        self.sending_note = false;
    }

    /// Display label for a note's sender in this view: the founder by
    /// title, the intern themselves as "You".
    #[must_use]
    pub fn sender_label(&self, note: &Note) -> &'static str {
        match note.sender_role {
            Role::Admin => FOUNDER_LABEL,
            Role::Intern => "You",
        }
    }
}
