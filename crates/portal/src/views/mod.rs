//! Role-gated dashboard views.
//!
//! A view is a snapshot of its read set plus the mutations the role may
//! perform. Every mutation issues a direct write and then a full refetch of
//! the dependent read set - no optimistic updates, no incremental merging.
//! Failures surface as transient [`Notice`]s and leave the previous
//! snapshot unchanged so the user can retry.

pub mod admin;
pub mod intern;

pub use admin::AdminView;
pub use intern::InternView;

use intrasphere_core::Role;

use crate::models::CurrentUser;
use crate::store::TableStore;

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user-facing notification, dismissed after display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// The two mutually exclusive dashboards, keyed by the session role.
pub enum Dashboard<'a, S> {
    Admin(AdminView<'a, S>),
    Intern(InternView<'a, S>),
}

impl<'a, S: TableStore> Dashboard<'a, S> {
    /// Open the dashboard appropriate for the logged-in identity, with its
    /// initial snapshot fetched.
    pub async fn open(store: &'a S, user: CurrentUser) -> Self {
        match user.role {
            Role::Admin => Self::Admin(AdminView::open(store, user).await),
            Role::Intern => Self::Intern(InternView::open(store, user).await),
        }
    }
}
