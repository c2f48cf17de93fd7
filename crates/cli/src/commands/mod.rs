//! CLI command implementations.

pub mod admin;
pub mod intern;

use intrasphere_portal::config::PortalConfig;
use intrasphere_portal::store::RestStore;

/// Load environment configuration and connect to the hosted datastore.
fn connect() -> Result<RestStore, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = PortalConfig::from_env()?;
    Ok(RestStore::new(&config)?)
}
