// ABOUTME: Composition root for the command line
// ABOUTME: Loads settings from the environment and builds the router and user service from them

use anyhow::{Context, Result};
use multiboard_client::{FileTokenStore, Notifier, TokenStore, UserService};
use multiboard_config::{ApiSettings, RouteSettings};
use multiboard_router::{create_router, Router};
use std::sync::Arc;
use tracing::debug;

/// Settings for one CLI invocation
#[derive(Debug, Clone)]
pub struct AppContext {
    pub routes: RouteSettings,
    pub api: ApiSettings,
}

impl AppContext {
    /// Load `.env` (if present) and read both settings groups
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }

        Ok(Self {
            routes: RouteSettings::from_env(),
            api: ApiSettings::from_env().context("Invalid API configuration")?,
        })
    }

    pub fn router(&self) -> Router {
        create_router(&self.routes)
    }

    /// Token store selected by the settings
    pub fn token_store(&self) -> Result<FileTokenStore> {
        match &self.api.storage_path {
            Some(path) => Ok(FileTokenStore::new(path)),
            None => FileTokenStore::open_default().context("Could not locate token store"),
        }
    }

    /// User service reporting outcomes through `notifier`
    pub async fn user_service(&self, notifier: Arc<dyn Notifier>) -> Result<UserService> {
        self.api.validate()?;
        let store: Arc<dyn TokenStore> = Arc::new(self.token_store()?);
        UserService::new(&self.api, store, notifier)
            .await
            .context("Failed to create API client")
    }
}
