//! JSON file implementation of the [`Store`] capability.

use std::path::PathBuf;

use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument};

use super::record::{STORAGE_KEY, SessionRecord};
use super::{Store, StoreError};

/// Store backed by a single JSON file.
///
/// The file holds one object keyed by [`STORAGE_KEY`]; a missing file or
/// missing key reads as the default record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at the given path. The file is
    /// not created until the first save.
    #[instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "Creating JsonFileStore");
        Self { path }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Store for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<SessionRecord, StoreError> {
        if !self.path.exists() {
            debug!("Store file absent, using default record");
            return Ok(SessionRecord::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let slots: Map<String, Value> = serde_json::from_str(&content)?;

        let record = match slots.get(STORAGE_KEY) {
            Some(value) => serde_json::from_value(value.clone())?,
            None => {
                debug!(key = STORAGE_KEY, "Slot key absent, using default record");
                SessionRecord::default()
            }
        };

        info!(name = %record.name(), "Record loaded");
        Ok(record)
    }

    #[instrument(skip(self, record), fields(path = %self.path.display(), name = %record.name()))]
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let slots = json!({ STORAGE_KEY: record });
        let content = serde_json::to_string_pretty(&slots)?;
        std::fs::write(&self.path, content)?;
        info!("Record saved");
        Ok(())
    }
}
