use crate::{StoreError, StoreResult, is_valid_key};

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, warn};
use serde_json::Value;
use tb_core::KeyValueStore;

const EXTENSION: &str = "json";

/// One `<key>.json` file per key under `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) the data directory.
    pub fn open<P: Into<PathBuf>>(dir: P) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.clone(), e))?;
        debug!("JSON store opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{EXTENSION}"))
    }
}

impl KeyValueStore for JsonFileStore {
    type Error = StoreError;

    fn load(&self, key: &str, fallback: Value) -> Value {
        if !is_valid_key(key) {
            warn!("Refusing to load invalid key {key:?}");
            return fallback;
        }

        let path = self.path_for(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return fallback,
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return fallback;
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring unreadable {}: {e}", path.display());
            fallback
        })
    }

    /// Write to a sibling temp file, then rename over the target so a crash
    /// never leaves a truncated document behind.
    fn save(&mut self, key: &str, value: &Value) -> Result<(), Self::Error> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }

        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(self.dir.clone(), e))?;
        let path = self.path_for(key);
        let staging = self.dir.join(format!(".{key}.{EXTENSION}.tmp"));
        fs::write(&staging, json).map_err(|e| StoreError::io(staging.clone(), e))?;
        fs::rename(&staging, &path).map_err(|e| StoreError::io(path.clone(), e))?;

        debug!("Saved {key} to {}", path.display());
        Ok(())
    }
}
