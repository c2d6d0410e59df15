//! JSON-file implementation of the `PreferenceRepository` trait.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use confab_core::{PreferenceError, PreferenceRepository};

/// On-disk shape of the preference file.
///
/// A flat string map mirrors the keyed scalar entries the port contract
/// describes; `updated_at` records the last successful write.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// JSON-file implementation of the `PreferenceRepository` trait.
///
/// The whole file is re-read on `get` and rewritten on `set`. Last-write-wins
/// is per key: writes serialize on an internal lock so a concurrent `set` on
/// a different key can never drop an entry while both rewrite the file. A
/// missing file reads as empty. A corrupt file surfaces as an error -
/// deciding to treat that as "nothing stored" is the caller's policy, not
/// this crate's.
pub struct JsonPreferenceRepository {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonPreferenceRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file and its parent directories are created lazily on first
    /// write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<PrefsFile, PreferenceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| PreferenceError::Serialization(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PrefsFile::default()),
            Err(e) => Err(PreferenceError::Storage(e.to_string())),
        }
    }

    async fn write_file(&self, file: &PrefsFile) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(file)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }
}

#[async_trait]
impl PreferenceRepository for JsonPreferenceRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let file = self.read_file().await?;
        Ok(file.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // Hold the lock across the whole read-modify-write so concurrent
        // sets on different keys cannot lose each other's entry.
        let _guard = self.write_lock.lock().await;
        let mut file = self.read_file().await.unwrap_or_default();
        file.entries.insert(key.to_string(), value.to_string());
        file.updated_at = Some(Utc::now());
        self.write_file(&file).await?;
        debug!(key, path = %self.path.display(), "preference persisted");
        Ok(())
    }
}
