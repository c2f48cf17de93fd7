//! Note operations: the messaging feed and its visibility rules.
//!
//! This is where most of the portal's conditional logic lives. Addressing:
//! the admin sends either to the whole intern group or to one intern; an
//! intern always sends to the sole admin, implicitly, with the sender role
//! disambiguating. Visibility is realized as OR-filtered queries against
//! the notes table, always newest first.

use serde_json::json;
use tracing::info;

use intrasphere_core::{AdminId, InternId, NoteId, Role};

use crate::error::PortalError;
use crate::models::{EnrichedNote, Intern, Note, NoteTarget};
use crate::store::{Filter, Order, Query, Table, TableStore};

use super::{FOUNDER_LABEL, UNKNOWN_INTERN_LABEL, decode_row, decode_rows};

/// Repository for the notes table.
pub struct NoteRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: TableStore> NoteRepository<'a, S> {
    /// Create a new note repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Send a note as the admin, either to the whole group or to one intern.
    ///
    /// A group note has `is_group = true` and no receiver; a direct note
    /// carries the intern's id. `is_read` always starts false.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidInput`] if the content is empty after
    /// trimming, or [`PortalError::Store`] if the datastore call fails.
    pub async fn send_from_admin(
        &self,
        admin_id: AdminId,
        content: &str,
        target: NoteTarget,
    ) -> Result<Note, PortalError> {
        let content = trimmed_content(content)?;
        let (is_group, receiver_id) = match target {
            NoteTarget::Group => (true, None),
            NoteTarget::Direct(intern_id) => (false, Some(intern_id)),
        };

        let row = self
            .store
            .insert(
                Table::Notes,
                json!({
                    "sender_id": admin_id,
                    "sender_role": Role::Admin,
                    "content": content,
                    "receiver_id": receiver_id,
                    "is_group": is_group,
                    "is_read": false,
                }),
            )
            .await?;

        let note: Note = decode_row(row)?;
        info!(note_id = %note.id, is_group, "admin note sent");
        Ok(note)
    }

    /// Send a note as an intern.
    ///
    /// There is only one admin, so the receiver is left unset and the
    /// sender role marks the note as addressed to the founder.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidInput`] if the content is empty after
    /// trimming, or [`PortalError::Store`] if the datastore call fails.
    pub async fn send_from_intern(
        &self,
        intern_id: InternId,
        content: &str,
    ) -> Result<Note, PortalError> {
        let content = trimmed_content(content)?;

        let row = self
            .store
            .insert(
                Table::Notes,
                json!({
                    "sender_id": intern_id,
                    "sender_role": Role::Intern,
                    "content": content,
                    "receiver_id": null,
                    "is_group": false,
                    "is_read": false,
                }),
            )
            .await?;

        let note: Note = decode_row(row)?;
        info!(note_id = %note.id, "intern note sent");
        Ok(note)
    }

    /// Mark a note read. Idempotent: marking a read note again is a no-op.
    ///
    /// Only meaningful for intern-authored notes viewed by the admin.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NotFound`] if the id does not resolve, or
    /// [`PortalError::Store`] if the datastore call fails.
    pub async fn mark_read(&self, id: NoteId) -> Result<Note, PortalError> {
        let updated = self
            .store
            .update(
                Table::Notes,
                Filter::eq("id", id.to_string()),
                json!({ "is_read": true }),
            )
            .await?;

        decode_rows::<Note>(updated)?
            .into_iter()
            .next()
            .ok_or_else(|| PortalError::NotFound(format!("note {id}")))
    }

    /// Every note the admin is a party to, newest first.
    ///
    /// That is exactly {all admin-sent notes} ∪ {all intern-sent notes}:
    /// notes they sent, notes addressed to them, and intern-authored notes,
    /// which are all implicitly addressed to the sole admin.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if the datastore call fails.
    pub async fn admin_inbox(&self, admin_id: AdminId) -> Result<Vec<Note>, PortalError> {
        let filter = Filter::any(vec![
            Filter::eq("sender_id", admin_id.to_string()),
            Filter::eq("receiver_id", admin_id.to_string()),
            Filter::eq("sender_role", Role::Intern.to_string()),
        ]);
        let rows = self
            .store
            .select(
                Table::Notes,
                Query::filtered(filter).order(Order::desc("created_at")),
            )
            .await?;
        decode_rows(rows)
    }

    /// Every note visible to an intern, newest first: notes addressed
    /// directly to them, every broadcast, and their own sent notes.
    ///
    /// An intern never sees the admin's direct notes to other interns.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if the datastore call fails.
    pub async fn intern_inbox(&self, intern_id: InternId) -> Result<Vec<Note>, PortalError> {
        let filter = Filter::any(vec![
            Filter::eq("receiver_id", intern_id.to_string()),
            Filter::eq("is_group", true),
            Filter::eq("sender_id", intern_id.to_string()),
        ]);
        let rows = self
            .store
            .select(
                Table::Notes,
                Query::filtered(filter).order(Order::desc("created_at")),
            )
            .await?;
        decode_rows(rows)
    }
}

fn trimmed_content(content: &str) -> Result<&str, PortalError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(PortalError::InvalidInput(
            "note content must not be empty".to_string(),
        ));
    }
    Ok(content)
}

/// Resolve sender display names against an already-fetched intern list.
///
/// Admin-authored notes get the fixed founder label; intern notes resolve
/// the intern's name; an unresolvable sender id gets the fallback label
/// rather than failing the whole fetch.
#[must_use]
pub fn resolve_senders(notes: Vec<Note>, interns: &[Intern]) -> Vec<EnrichedNote> {
    notes
        .into_iter()
        .map(|note| {
            let sender_name = match note.sender_role {
                Role::Admin => FOUNDER_LABEL.to_string(),
                Role::Intern => interns
                    .iter()
                    .find(|intern| intern.id.as_uuid() == note.sender_id)
                    .map_or_else(|| UNKNOWN_INTERN_LABEL.to_string(), |i| i.name.clone()),
            };
            EnrichedNote { note, sender_name }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use uuid::Uuid;

    fn note(sender_role: Role, sender_id: Uuid) -> Note {
        Note {
            id: NoteId::generate(),
            sender_id,
            sender_role,
            content: "hi".to_string(),
            receiver_id: None,
            is_group: false,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_send_rejects_blank_content() {
        let store = MemoryStore::new();
        let notes = NoteRepository::new(&store);

        let err = notes
            .send_from_admin(AdminId::generate(), "  \n ", NoteTarget::Group)
            .await
            .expect_err("blank content");
        assert!(matches!(err, PortalError::InvalidInput(_)));

        let err = notes
            .send_from_intern(InternId::generate(), "")
            .await
            .expect_err("blank content");
        assert!(matches!(err, PortalError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_group_note_has_no_receiver() {
        let store = MemoryStore::new();
        let note = NoteRepository::new(&store)
            .send_from_admin(AdminId::generate(), "Welcome", NoteTarget::Group)
            .await
            .expect("send");

        assert!(note.is_group);
        assert_eq!(note.receiver_id, None);
        assert_eq!(note.sender_role, Role::Admin);
        assert!(!note.is_read);
    }

    #[tokio::test]
    async fn test_content_is_trimmed() {
        let store = MemoryStore::new();
        let note = NoteRepository::new(&store)
            .send_from_intern(InternId::generate(), "  Done with setup  ")
            .await
            .expect("send");
        assert_eq!(note.content, "Done with setup");
    }

    #[tokio::test]
    async fn test_mark_read_unknown_note_is_not_found() {
        let store = MemoryStore::new();
        let err = NoteRepository::new(&store)
            .mark_read(NoteId::generate())
            .await
            .expect_err("unknown note");
        assert!(matches!(err, PortalError::NotFound(_)));
    }

    #[test]
    fn test_resolve_senders_labels() {
        let priya = Intern {
            id: InternId::generate(),
            name: "Priya".to_string(),
        };
        let notes = vec![
            note(Role::Admin, Uuid::new_v4()),
            note(Role::Intern, priya.id.as_uuid()),
            note(Role::Intern, Uuid::new_v4()),
        ];

        let enriched = resolve_senders(notes, std::slice::from_ref(&priya));
        let labels: Vec<&str> = enriched.iter().map(|n| n.sender_name.as_str()).collect();
        assert_eq!(labels, [FOUNDER_LABEL, "Priya", UNKNOWN_INTERN_LABEL]);
    }
}
