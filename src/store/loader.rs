//! Store loading
//!
//! Opens the backing file in a given access mode and decodes its contents.

use crate::domain::Record;
use crate::error::StoreError;

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::Path;

/// How the backing file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Create the file if absent, then open it for reading only
    ReadOnlyCreate,
    /// Open for reading and writing, creating the file if absent and
    /// truncating it to zero length
    ReadWriteTruncateCreate,
}

/// An opened store: the decoded sequence plus, for write modes, the handle
#[derive(Debug)]
pub struct LoadedStore {
    /// Open handle, present only for [`AccessMode::ReadWriteTruncateCreate`]
    pub handle: Option<File>,
    /// Records decoded from the file at open time
    pub records: Vec<Record>,
}

/// Open `path` in `mode`, read all bytes and decode them as a JSON array
pub fn load(path: &Path, mode: AccessMode) -> Result<LoadedStore, StoreError> {
    log::debug!("Opening store {} ({:?})", path.display(), mode);

    let mut file = open(path, mode)?;

    let mut body = Vec::new();
    file.read_to_end(&mut body).map_err(|source| StoreError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let records = decode_records(path, &body)?;
    log::debug!("Loaded {} record(s) from {}", records.len(), path.display());

    let handle = match mode {
        AccessMode::ReadOnlyCreate => None,
        AccessMode::ReadWriteTruncateCreate => Some(file),
    };

    Ok(LoadedStore { handle, records })
}

fn open(path: &Path, mode: AccessMode) -> Result<File, StoreError> {
    let open_err = |source| StoreError::Open {
        path: path.display().to_string(),
        source,
    };

    match mode {
        AccessMode::ReadOnlyCreate => {
            // Opening read-only cannot create, so create an empty file first
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(path)
                    .map_err(open_err)?;
                log::debug!("Created empty store {}", path.display());
            }
            OpenOptions::new().read(true).open(path).map_err(open_err)
        }
        AccessMode::ReadWriteTruncateCreate => OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(open_err),
    }
}

/// Decode a file body; an empty or whitespace-only body is an empty store
fn decode_records(path: &Path, body: &[u8]) -> Result<Vec<Record>, StoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(body).map_err(|source| StoreError::Decode {
        path: path.display().to_string(),
        source,
    })
}
