//! Seed the founder-admin record.
//!
//! Admins are created out-of-band and are immutable thereafter; the portal
//! itself has no admin-creation surface.

use serde_json::json;
use tracing::info;

use intrasphere_core::DisplayName;
use intrasphere_portal::store::{Table, TableStore as _};

/// Create the founder-admin record.
///
/// # Errors
///
/// Returns an error if the name is empty, the environment is not
/// configured, or the datastore call fails.
pub async fn create(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let name = DisplayName::parse(name)?;
    let store = super::connect()?;

    let row = store
        .insert(Table::Admins, json!({ "name": name.as_str() }))
        .await?;

    let id = row.get("id").and_then(serde_json::Value::as_str).unwrap_or("?");
    info!(admin_id = %id, name = %name, "admin created");
    Ok(())
}
