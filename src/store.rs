// SPDX-License-Identifier: MPL-2.0
//! Persistence of the visitor's language preference.
//!
//! A single record lives under the well-known key `lang`, serialized as JSON
//! with an absolute expiry timestamp. Storage backends are deliberately dumb
//! string stores behind [`KvStorage`]; two implementations ship here:
//!
//! - [`MemoryStorage`] for tests and in-process use
//! - [`FileStorage`], one file per key under a data directory
//!
//! Every store operation is fault-tolerant: a backend that is unavailable or
//! holds corrupt data degrades to "no preference", never to a caller-visible
//! error. Expiry is lazy, evaluated at read time; an expired record is
//! removed on the read that discovers it.

use crate::error::{Error, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Storage key holding the language preference.
pub const PREFERENCE_KEY: &str = "lang";

const MS_PER_DAY: i64 = 86_400_000;

/// Directory name used under the platform data directory.
const APP_NAME: &str = "BlogLang";

/// Synchronous string key-value storage.
///
/// The stand-in for browser `localStorage`: get/set/remove by string key,
/// each of which may fail.
pub trait KvStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: each key is one file under a base directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit directory (used by tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Storage under the platform data directory, when one exists.
    pub fn from_data_dir() -> Option<Self> {
        dirs::data_dir().map(|mut dir| {
            dir.push(APP_NAME);
            Self { dir }
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::Storage(e.to_string()))?;
        fs::write(self.key_path(key), value).map_err(|e| Error::Storage(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path).map_err(|e| Error::Storage(e.to_string()))
    }
}

/// The persisted record: a locale code plus an absolute expiry in epoch ms.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    value: String,
    expires: i64,
}

/// Read/write access to the single stored language preference.
pub struct PreferenceStore<S: KvStorage> {
    storage: S,
}

impl<S: KvStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the stored locale code, or `None` when the record is missing,
    /// corrupt, unreadable, or expired. An expired record is deleted as a
    /// side effect.
    pub fn load(&mut self) -> Option<String> {
        let raw = match self.storage.get(PREFERENCE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read language preference: {e}");
                return None;
            }
        };

        let preference: StoredPreference = match serde_json::from_str(&raw) {
            Ok(preference) => preference,
            Err(e) => {
                warn!("failed to parse stored language preference: {e}");
                return None;
            }
        };

        if Utc::now().timestamp_millis() > preference.expires {
            if let Err(e) = self.storage.remove(PREFERENCE_KEY) {
                warn!("failed to remove expired language preference: {e}");
            }
            return None;
        }

        Some(preference.value)
    }

    /// Stores `code` with an expiry `ttl_days` from now. Best-effort: a
    /// failing backend is logged and otherwise ignored.
    pub fn save(&mut self, code: &str, ttl_days: i64) {
        let preference = StoredPreference {
            value: code.to_string(),
            expires: Utc::now().timestamp_millis() + ttl_days * MS_PER_DAY,
        };
        let raw = match serde_json::to_string(&preference) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize language preference: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(PREFERENCE_KEY, &raw) {
            warn!("failed to save language preference: {e}");
        }
    }

    /// Deletes the stored preference. Best-effort.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(PREFERENCE_KEY) {
            warn!("failed to clear language preference: {e}");
        }
    }

    /// The underlying storage, for direct inspection in tests.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
