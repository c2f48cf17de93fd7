//! Note rows: the two-way feed between the founder and the interns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use intrasphere_core::{InternId, NoteId, Role};

/// A note in the messaging feed.
///
/// Invariants:
/// - `is_group = true` implies `receiver_id = None` (broadcast to all
///   interns; only the admin sends these).
/// - An intern-authored note has `receiver_id = None` too: the sole admin is
///   the implicit receiver, and `sender_role` disambiguates.
/// - Notes are immutable except for the one-way `is_read` transition, and
///   are never deleted. `is_read` is meaningful only on intern-authored
///   notes viewed by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Sender identity; an admin or intern id depending on `sender_role`.
    pub sender_id: Uuid,
    pub sender_role: Role,
    pub content: String,
    pub receiver_id: Option<InternId>,
    pub is_group: bool,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Addressing for an admin-sent note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTarget {
    /// Broadcast to all interns.
    Group,
    /// Direct to one intern.
    Direct(InternId),
}

/// A note with its sender's display name resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedNote {
    #[serde(flatten)]
    pub note: Note,
    pub sender_name: String,
}
