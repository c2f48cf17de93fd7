//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PORTAL_DATA_URL` - Base URL of the hosted table-query API
//! - `PORTAL_DATA_API_KEY` - API key for the hosted datastore
//!
//! Connection configuration is deliberately the only environment-derived
//! behavior; nothing else in the portal reads the environment.

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the hosted table-query API.
    pub data_url: Url,
    /// API key sent with every datastore request.
    pub data_api_key: SecretString,
}

impl PortalConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is not
    /// set, or [`ConfigError::InvalidEnvVar`] if `PORTAL_DATA_URL` is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = require_env("PORTAL_DATA_URL")?;
        let data_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_DATA_URL".into(), e.to_string()))?;

        let data_api_key = SecretString::from(require_env("PORTAL_DATA_API_KEY")?);

        Ok(Self {
            data_url,
            data_api_key,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
