//! File-backed record store
//!
//! Implements [`RecordStore`] over a single JSON file on disk.

use crate::domain::{JsonStyle, Record};
use crate::error::StoreError;
use crate::store::loader::{load, AccessMode};
use crate::store::traits::RecordStore;
use crate::store::writer::persist;

use std::path::{Path, PathBuf};

/// Record store backed by one JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    location: String,
    style: JsonStyle,
}

impl FileStore {
    /// Create a store for `path`; nothing is opened until first use
    pub fn new<P: AsRef<Path>>(path: P, style: JsonStyle) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self {
            path,
            location,
            style,
        }
    }
}

impl RecordStore for FileStore {
    fn location(&self) -> &str {
        &self.location
    }

    fn read(&self) -> Result<Vec<Record>, StoreError> {
        Ok(load(&self.path, AccessMode::ReadOnlyCreate)?.records)
    }

    fn write(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let loaded = load(&self.path, AccessMode::ReadWriteTruncateCreate)?;
        let mut handle = loaded
            .handle
            .ok_or_else(|| StoreError::ReadOnly(self.location.clone()))?;
        persist(&mut handle, &self.location, records, self.style)
    }
}
