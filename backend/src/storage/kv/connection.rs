//! # KV Connection
//!
//! `KvConnection` manages a data directory holding one JSON document per
//! key (`<key>.json`). It is the only place that touches the filesystem.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── motorcycles.json    ← the whole inventory under one key
//! ```
//!
//! Reads treat a missing or unreadable document as absent so a corrupt store
//! degrades to an empty record set instead of failing startup. Writes go
//! through a temp file and rename, so a crash mid-write never leaves a
//! half-written document behind.

use anyhow::Result;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::storage::kv::motorcycle_repository::MotorcycleRepository;
use crate::storage::traits::Connection;

#[derive(Clone)]
pub struct KvConnection {
    base_directory: Arc<Mutex<PathBuf>>,
}

impl KvConnection {
    /// Create a connection against a base directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
        })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Moto Tracker`.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Moto Tracker");
        Self::new(data_dir)
    }

    /// Get the current data directory path.
    pub fn base_directory(&self) -> PathBuf {
        let base_dir = self.base_directory.lock().unwrap();
        base_dir.clone()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory().join(format!("{}.json", key))
    }

    /// Read the document stored under `key`. A missing, unreadable or
    /// unparsable document yields `None` (with a warning for the latter two).
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read document for key '{}': {}", key, e);
                return Ok(None);
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Discarding unparsable document for key '{}': {}", key, e);
                Ok(None)
            }
        }
    }

    /// Write the document under `key`, atomically.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let base_dir = self.base_directory();
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }

        let json = serde_json::to_string_pretty(value)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

impl Connection for KvConnection {
    type MotorcycleRepository = MotorcycleRepository;

    fn create_motorcycle_repository(&self) -> MotorcycleRepository {
        MotorcycleRepository::new(self.clone())
    }
}
