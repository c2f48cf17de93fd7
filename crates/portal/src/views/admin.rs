//! The founder dashboard.

use tracing::debug;

use intrasphere_core::{AdminId, InternId, NoteId};

use crate::db::{DirectoryRepository, NoteRepository, TaskRepository, resolve_senders};
use crate::error::PortalError;
use crate::models::{CurrentUser, EnrichedNote, Intern, NoteTarget, TaskWithIntern};
use crate::store::TableStore;

use super::Notice;

/// The admin's view: manage interns, assign tasks, converse.
///
/// Holds the fetched snapshot of its read set - the intern directory, every
/// task joined with its owner's name, and the enriched admin inbox.
pub struct AdminView<'a, S> {
    store: &'a S,
    user: CurrentUser,
    pub interns: Vec<Intern>,
    pub tasks: Vec<TaskWithIntern>,
    pub notes: Vec<EnrichedNote>,
    pub notices: Vec<Notice>,
    sending_note: bool,
}

impl<'a, S: TableStore> AdminView<'a, S> {
    /// Open the dashboard and fetch the initial snapshot.
    pub async fn open(store: &'a S, user: CurrentUser) -> Self {
        let mut view = Self {
            store,
            user,
            interns: Vec::new(),
            tasks: Vec::new(),
            notes: Vec::new(),
            notices: Vec::new(),
            sending_note: false,
        };
        view.refresh().await;
        view
    }

    /// The logged-in founder.
    #[must_use]
    pub const fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn admin_id(&self) -> AdminId {
        AdminId::new(self.user.id)
    }

    /// Refetch the full read set. On failure the previous snapshot stays in
    /// place and an error notice is pushed.
    pub async fn refresh(&mut self) {
        match self.fetch_snapshot().await {
            Ok((interns, tasks, notes)) => {
                self.interns = interns;
                self.tasks = tasks;
                self.notes = notes;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    async fn fetch_snapshot(
        &self,
    ) -> Result<(Vec<Intern>, Vec<TaskWithIntern>, Vec<EnrichedNote>), PortalError> {
        let interns = DirectoryRepository::new(self.store).list_interns().await?;
        let tasks = TaskRepository::new(self.store).list_all().await?;
        let inbox = NoteRepository::new(self.store)
            .admin_inbox(self.admin_id())
            .await?;
        let notes = resolve_senders(inbox, &interns);
        Ok((interns, tasks, notes))
    }

    /// Add an intern to the directory.
    pub async fn add_intern(&mut self, name: &str) {
        match DirectoryRepository::new(self.store).add_intern(name).await {
            Ok(_) => {
                self.notices.push(Notice::success("Intern added successfully!"));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    /// Remove an intern (their tasks go with them; notes stay).
    pub async fn remove_intern(&mut self, id: InternId) {
        match DirectoryRepository::new(self.store).remove_intern(id).await {
            Ok(()) => {
                self.notices.push(Notice::success("Intern removed"));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    /// Assign a new task to an intern.
    pub async fn assign_task(&mut self, title: &str, intern_id: InternId) {
        match TaskRepository::new(self.store).assign(title, intern_id).await {
            Ok(_) => {
                self.notices.push(Notice::success("Task assigned!"));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }

    /// Send a note to one intern or to the whole group.
    ///
    /// Guarded by an in-flight flag: a second send issued before the first
    /// completes is dropped rather than sequenced.
    pub async fn send_note(&mut self, content: &str, target: NoteTarget) {
        if self.sending_note {
            debug!("note send already in flight, dropping");
            return;
        }
        self.sending_note = true;

        match NoteRepository::new(self.store)
            .send_from_admin(self.admin_id(), content, target)
            .await
        {
            Ok(_) => {
                let text = match target {
                    NoteTarget::Group => "Group message sent!",
                    NoteTarget::Direct(_) => "Note sent!",
                };
                self.notices.push(Notice::success(text));
                self.refresh().await;
            }
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }

        self.sending_note = false;
    }

    /// Mark an intern-authored note as read.
    pub async fn mark_read(&mut self, id: NoteId) {
        match NoteRepository::new(self.store).mark_read(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.notices.push(Notice::error(e.user_message())),
        }
    }
}
