// ABOUTME: Durable key-value storage for the session token
// ABOUTME: In-memory store for tests and embedding, TOML file store for the CLI

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error};

use crate::error::{ClientError, ClientResult};

/// Key the session token is stored under
pub const JWT_KEY: &str = "jwt";

/// Key-value storage the client persists its token in.
///
/// Each call is atomic on its own; callers that race a login against a
/// status check must order those calls themselves.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> ClientResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    async fn remove(&self, key: &str) -> ClientResult<()>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session token
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(JWT_KEY.to_string(), token.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Store backed by a TOML file of string entries.
///
/// Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at `~/.multiboard/storage.toml`
    pub fn open_default() -> ClientResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> ClientResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config("Could not determine home directory"))?;

        Ok(home_dir.join(".multiboard").join("storage.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ClientResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                error!("Failed to read token store {}: {}", self.path.display(), e);
                return Err(ClientError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|e| {
            ClientError::storage(format!(
                "Invalid token store {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ClientError::storage(format!("Failed to create store dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(entries)
            .map_err(|e| ClientError::storage(format!("Failed to serialize store: {}", e)))?;

        fs::write(&self.path, content).await.map_err(|e| {
            error!("Failed to write token store {}: {}", self.path.display(), e);
            ClientError::storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await?;
        debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> ClientResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
            debug!("Removed '{}' from {}", key, self.path.display());
        }
        Ok(())
    }
}
