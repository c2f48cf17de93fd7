//! Integration tests for IntraSphere.
//!
//! The scenarios run against the in-memory table store, which implements
//! the same contract as the hosted datastore (assigned ids and timestamps,
//! natural-key uniqueness on directory names, filter/order semantics).
//!
//! # Test Categories
//!
//! - `directory_login` - Directory lookups and the login flow
//! - `task_lifecycle` - Task assignment, completion, and intern removal
//! - `messaging_visibility` - The notes feed and its visibility rules

use serde_json::json;

use intrasphere_core::AdminId;
use intrasphere_portal::db::DirectoryRepository;
use intrasphere_portal::models::{CurrentUser, Intern};
use intrasphere_portal::services::AuthService;
use intrasphere_portal::store::{MemoryStore, Table, TableStore as _};
use intrasphere_portal::views::{AdminView, InternView};

/// Name of the seeded founder-admin.
pub const FOUNDER_NAME: &str = "Ana";

/// A seeded portal: an in-memory store with the founder-admin record in
/// place, plus helpers for the repeated setup steps.
pub struct TestPortal {
    pub store: MemoryStore,
    pub founder: CurrentUser,
}

impl TestPortal {
    /// Seed the founder record and log in as them.
    pub async fn new() -> Self {
        let store = MemoryStore::new();
        store
            .insert(Table::Admins, json!({ "name": FOUNDER_NAME }))
            .await
            .expect("seed founder");

        let founder = AuthService::new(&store)
            .login(FOUNDER_NAME)
            .await
            .expect("founder login");

        Self { store, founder }
    }

    /// The founder's typed id.
    #[must_use]
    pub fn founder_id(&self) -> AdminId {
        AdminId::new(self.founder.id)
    }

    /// Log in as a directory member by name.
    pub async fn login(&self, name: &str) -> CurrentUser {
        AuthService::new(&self.store)
            .login(name)
            .await
            .expect("login")
    }

    /// Add an intern to the directory.
    pub async fn add_intern(&self, name: &str) -> Intern {
        DirectoryRepository::new(&self.store)
            .add_intern(name)
            .await
            .expect("add intern")
    }

    /// Open the founder dashboard.
    pub async fn admin_view(&self) -> AdminView<'_, MemoryStore> {
        AdminView::open(&self.store, self.founder.clone()).await
    }

    /// Log in as an intern and open their dashboard.
    pub async fn intern_view(&self, name: &str) -> InternView<'_, MemoryStore> {
        let user = self.login(name).await;
        InternView::open(&self.store, user).await
    }
}
