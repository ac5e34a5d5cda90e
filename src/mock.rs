//! Mock implementations for testing
//!
//! Provides an in-memory record store for unit testing without touching disk.

use crate::domain::Record;
use crate::error::StoreError;
use crate::store::RecordStore;

/// In-memory record store that counts writes
#[derive(Debug, Default)]
pub struct MockStore {
    records: Vec<Record>,
    writes: usize,
    fail_reads: bool,
}

impl MockStore {
    /// Create a mock store holding `records`
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            writes: 0,
            fail_reads: false,
        }
    }

    /// Create a mock store whose reads fail with a decode error
    pub fn corrupt() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Current stored records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of times the store was rewritten
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RecordStore for MockStore {
    fn location(&self) -> &str {
        "mock"
    }

    fn read(&self) -> Result<Vec<Record>, StoreError> {
        if self.fail_reads {
            let source = serde_json::from_str::<Vec<Record>>("{").unwrap_err();
            return Err(StoreError::Decode {
                path: self.location().to_string(),
                source,
            });
        }
        Ok(self.records.clone())
    }

    fn write(&mut self, records: &[Record]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        self.writes += 1;
        Ok(())
    }
}
