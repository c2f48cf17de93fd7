//! Directory operations: the name-keyed identity sets.

use serde_json::json;
use tracing::{info, warn};

use intrasphere_core::{DisplayName, InternId};

use crate::error::PortalError;
use crate::models::{Admin, DirectoryEntry, Intern};
use crate::store::{Filter, Query, StoreError, Table, TableStore};

use super::{decode_row, decode_rows};

/// Repository for the admin and intern directory tables.
pub struct DirectoryRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: TableStore> DirectoryRepository<'a, S> {
    /// Create a new directory repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Look up a name across both identity sets.
    ///
    /// Admins are checked before interns, so a name collision across the two
    /// sets resolves to the admin.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if a datastore call fails.
    pub async fn find_by_name(
        &self,
        name: &DisplayName,
    ) -> Result<Option<DirectoryEntry>, PortalError> {
        let admins = self
            .store
            .select(
                Table::Admins,
                Query::filtered(Filter::eq("name", name.as_str())),
            )
            .await?;
        if let Some(admin) = decode_rows::<Admin>(admins)?.into_iter().next() {
            return Ok(Some(DirectoryEntry::Admin(admin)));
        }

        let interns = self
            .store
            .select(
                Table::Interns,
                Query::filtered(Filter::eq("name", name.as_str())),
            )
            .await?;
        Ok(decode_rows::<Intern>(interns)?
            .into_iter()
            .next()
            .map(DirectoryEntry::Intern))
    }

    /// List every intern.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Store`] if the datastore call fails.
    pub async fn list_interns(&self) -> Result<Vec<Intern>, PortalError> {
        let rows = self.store.select(Table::Interns, Query::all()).await?;
        decode_rows(rows)
    }

    /// Add an intern to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::DuplicateOrInvalid`] if the name is empty or
    /// collides with an existing intern, or [`PortalError::Store`] if the
    /// datastore call fails.
    pub async fn add_intern(&self, name: &str) -> Result<Intern, PortalError> {
        let name = DisplayName::parse(name)
            .map_err(|e| PortalError::DuplicateOrInvalid(e.to_string()))?;

        let row = self
            .store
            .insert(Table::Interns, json!({ "name": name.as_str() }))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => PortalError::DuplicateOrInvalid(format!(
                    "an intern named {name} already exists"
                )),
                other => PortalError::Store(other),
            })?;

        let intern: Intern = decode_row(row)?;
        info!(intern_id = %intern.id, "intern added");
        Ok(intern)
    }

    /// Remove an intern from the directory.
    ///
    /// The intern's tasks are cleaned up best-effort as a second,
    /// independent call; the two writes are not transactional. Notes are
    /// kept as conversation history and render with the fallback sender
    /// label from then on.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NotFound`] if the id does not resolve, or
    /// [`PortalError::Store`] if the delete fails.
    pub async fn remove_intern(&self, id: InternId) -> Result<(), PortalError> {
        let removed = self
            .store
            .delete(Table::Interns, Filter::eq("id", id.to_string()))
            .await?;
        if removed == 0 {
            return Err(PortalError::NotFound(format!("intern {id}")));
        }
        info!(intern_id = %id, "intern removed");

        if let Err(e) = self
            .store
            .delete(Table::Tasks, Filter::eq("intern_id", id.to_string()))
            .await
        {
            warn!(intern_id = %id, error = %e, "task cleanup after intern removal failed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_add_intern_rejects_empty_name() {
        let store = MemoryStore::new();
        let directory = DirectoryRepository::new(&store);

        let err = directory.add_intern("   ").await.expect_err("must reject");
        assert!(matches!(err, PortalError::DuplicateOrInvalid(_)));
    }

    #[tokio::test]
    async fn test_add_intern_trims_name() {
        let store = MemoryStore::new();
        let directory = DirectoryRepository::new(&store);

        let intern = directory.add_intern("  Priya ").await.expect("add");
        assert_eq!(intern.name, "Priya");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_surfaced_as_duplicate() {
        let store = MemoryStore::new();
        let directory = DirectoryRepository::new(&store);

        directory.add_intern("Priya").await.expect("first add");
        let err = directory
            .add_intern("Priya")
            .await
            .expect_err("duplicate must fail");
        assert!(matches!(err, PortalError::DuplicateOrInvalid(_)));
    }

    #[tokio::test]
    async fn test_remove_unknown_intern_is_not_found() {
        let store = MemoryStore::new();
        let directory = DirectoryRepository::new(&store);

        let err = directory
            .remove_intern(InternId::generate())
            .await
            .expect_err("unknown id");
        assert!(matches!(err, PortalError::NotFound(_)));
    }
}
