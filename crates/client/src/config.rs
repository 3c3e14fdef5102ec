//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PAWLY_API_URL` - Backend base URL (default: `http://localhost:5044/api`)
//! - `PAWLY_DATA_DIR` - Directory for persisted client state
//!   (default: the platform-local data dir, e.g. `~/.local/share/pawly`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL (the local development server).
const DEFAULT_API_URL: &str = "http://localhost:5044/api";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No usable data directory; set PAWLY_DATA_DIR")]
    NoDataDir,
}

/// Pawly client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL.
    pub api_url: String,
    /// Directory holding persisted cart/session state.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `PAWLY_API_URL` is not a valid
    /// URL, or `ConfigError::NoDataDir` if no data directory can be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("PAWLY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PAWLY_API_URL".to_owned(), e.to_string()))?;

        let data_dir = match env::var("PAWLY_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_local_dir()
                .map(|dir| dir.join("pawly"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Self { api_url, data_dir })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_is_valid() {
        assert!(Url::parse(DEFAULT_API_URL).is_ok());
    }
}
