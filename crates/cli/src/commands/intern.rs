//! Intern management from the terminal.

use tracing::info;

use intrasphere_core::InternId;
use intrasphere_portal::db::DirectoryRepository;

/// Add an intern to the directory.
///
/// # Errors
///
/// Returns an error if the name is empty or duplicate, the environment is
/// not configured, or the datastore call fails.
pub async fn add(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::connect()?;
    let intern = DirectoryRepository::new(&store).add_intern(name).await?;
    info!(intern_id = %intern.id, name = %intern.name, "intern added");
    Ok(())
}

/// Remove an intern from the directory.
///
/// # Errors
///
/// Returns an error if the id does not resolve, the environment is not
/// configured, or the datastore call fails.
pub async fn remove(id: InternId) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::connect()?;
    DirectoryRepository::new(&store).remove_intern(id).await?;
    info!(intern_id = %id, "intern removed");
    Ok(())
}

/// List every intern in the directory.
///
/// # Errors
///
/// Returns an error if the environment is not configured or the datastore
/// call fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = super::connect()?;
    let interns = DirectoryRepository::new(&store).list_interns().await?;

    info!(count = interns.len(), "interns in directory");
    for intern in interns {
        info!(intern_id = %intern.id, name = %intern.name);
    }
    Ok(())
}
