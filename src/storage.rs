//! Local persistence for store state.
//!
//! Each store serializes its whole state into a named JSON blob. Blobs live
//! as individual files under the platform data directory; an in-memory
//! backend backs tests and ephemeral runs.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Blob name for the chat session store.
pub const CHAT_STORE: &str = "chat-store";
/// Blob name for the resource/bookmark/result store.
pub const RESOURCE_STORE: &str = "resource-store";
/// Blob name for the user profile store.
pub const USER_STORE: &str = "user-store";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create storage directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("failed to write blob: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to delete blob: {0}")]
    Delete(#[source] std::io::Error),

    #[error("failed to serialize blob: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Cloneable handle to a blob store. Stores each hold one and rewrite their
/// blob on every mutation.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<Backend>,
}

enum Backend {
    Dir(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

impl Storage {
    /// File-backed storage under the platform-local data directory.
    pub fn open() -> Self {
        let dir = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("digiequity"),
            None => PathBuf::from("cache").join("digiequity"),
        };
        Self::at_dir(dir)
    }

    /// File-backed storage rooted at an explicit directory.
    pub fn at_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Arc::new(Backend::Dir(dir.into())),
        }
    }

    /// Volatile storage; nothing survives the process.
    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(Backend::Memory(Mutex::new(HashMap::new()))),
        }
    }

    /// Load and decode a named blob. Missing or undecodable blobs yield
    /// `None`; a corrupt blob is logged and treated as absent.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let raw = self.read_raw(name)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(blob = name, error = %err, "discarding corrupt blob");
                None
            }
        }
    }

    /// Encode and write a named blob, replacing any previous contents.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        match &*self.backend {
            Backend::Dir(dir) => {
                fs::create_dir_all(dir).map_err(StorageError::CreateDir)?;
                let path = dir.join(format!("{}.json", sanitize_name(name)));
                fs::write(path, raw).map_err(StorageError::Write)
            }
            Backend::Memory(map) => {
                // A writer that panicked mid-insert leaves the map usable.
                let mut map = map.lock().unwrap_or_else(|e| e.into_inner());
                map.insert(name.to_string(), raw);
                Ok(())
            }
        }
    }

    /// Remove a named blob if present.
    pub fn delete(&self, name: &str) -> Result<(), StorageError> {
        match &*self.backend {
            Backend::Dir(dir) => {
                let path = dir.join(format!("{}.json", sanitize_name(name)));
                if path.exists() {
                    fs::remove_file(path).map_err(StorageError::Delete)?;
                }
                Ok(())
            }
            Backend::Memory(map) => {
                let mut map = map.lock().unwrap_or_else(|e| e.into_inner());
                map.remove(name);
                Ok(())
            }
        }
    }

    fn read_raw(&self, name: &str) -> Option<String> {
        match &*self.backend {
            Backend::Dir(dir) => {
                let path = dir.join(format!("{}.json", sanitize_name(name)));
                fs::read_to_string(path).ok()
            }
            Backend::Memory(map) => {
                let map = map.lock().unwrap_or_else(|e| e.into_inner());
                map.get(name).cloned()
            }
        }
    }
}

/// Sanitize blob name for filesystem use.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
