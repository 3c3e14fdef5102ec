//! CLI command implementations.

pub mod account;
pub mod admin;
pub mod clinic;
pub mod content;
pub mod shop;

use pawly_client::{ApiClient, CartManager, ClientConfig, ConfigError, JsonFileStore, SessionManager};

/// Shared command context: the API gateway plus both state managers,
/// restored from the data directory.
pub struct Context {
    pub api: ApiClient,
    pub cart: CartManager<JsonFileStore>,
    pub sessions: SessionManager<JsonFileStore>,
}

impl Context {
    /// Load configuration, open the state store, and restore persisted
    /// cart/session state. Restore completes before any command runs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the environment configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ClientConfig::from_env()?;
        let api = ApiClient::from_config(&config);
        let store = JsonFileStore::new(config.data_dir.clone());

        let cart = CartManager::new(store.clone());
        let mut sessions = SessionManager::new(store, api.clone());
        sessions.restore();

        Ok(Self {
            api,
            cart,
            sessions,
        })
    }
}
