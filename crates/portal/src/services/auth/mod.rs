//! The login flow.
//!
//! Login is a plaintext name lookup against the directory - no password, no
//! token. The flow is `LoggedOut -> Resolving -> LoggedIn(role)` on a match,
//! or back to `LoggedOut` with a "user not found" message on a miss. The
//! caller stores the resulting identity in its [`SessionSlot`]; logout
//! clears the slot unconditionally.
//!
//! [`SessionSlot`]: crate::models::SessionSlot

mod error;

pub use error::AuthError;

use tracing::info;

use intrasphere_core::DisplayName;

use crate::db::DirectoryRepository;
use crate::models::CurrentUser;
use crate::store::TableStore;

/// Name-based login against the directory.
pub struct AuthService<'a, S> {
    directory: DirectoryRepository<'a, S>,
}

impl<'a, S: TableStore> AuthService<'a, S> {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            directory: DirectoryRepository::new(store),
        }
    }

    /// Resolve a typed name into a role-tagged identity.
    ///
    /// Admins are checked before interns, so a name collision resolves to
    /// the admin.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyName`] without a store round trip if the
    /// trimmed name is empty, [`AuthError::UserNotFound`] on a directory
    /// miss, or [`AuthError::Portal`] if the lookup itself fails.
    pub async fn login(&self, name: &str) -> Result<CurrentUser, AuthError> {
        let name = DisplayName::parse(name).map_err(|_| AuthError::EmptyName)?;

        let entry = self
            .directory
            .find_by_name(&name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let user = entry.into_current_user();
        info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(user)
    }
}
