//! Preference repository trait definition.
//!
//! This port defines the interface for persisting small scalar preference
//! entries (selected model, theme choice) as keyed strings. Implementations
//! handle all storage details internally.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

/// Errors for preference storage operations.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Storage backend error (filesystem, quota, permissions).
    #[error("storage error: {0}")]
    Storage(String),

    /// The stored data could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository for persisted user preferences.
///
/// Entries are independent scalar strings under fixed keys, last-write-wins.
/// The repository reports failures honestly; deciding whether a failure is
/// tolerable (it is, for every caller in this crate) happens in the stores.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// An in-memory preference repository for tests and headless contexts.
///
/// Entries live in a process-local map and are lost on drop. Suitable for:
/// - Unit tests that need to seed or inspect persisted values
/// - Ephemeral contexts where persistence is unwanted
#[derive(Debug, Default)]
pub struct MemoryPreferenceRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
