//! Record operations service
//!
//! Pure transformations and queries over a record sequence. Nothing here
//! touches the backing file; callers persist the result.

use crate::domain::{Record, RemovalStrategy};

/// Result of an add attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Record was appended; the sequence must be persisted
    Added,
    /// A record with the same id exists; the sequence is unchanged
    AlreadyExists(String),
}

/// Result of a remove attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Record was taken out; the sequence must be persisted
    Removed(Record),
    /// No record with the id; the sequence is unchanged
    NotFound(String),
}

/// Service applying add/remove/find to a record sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordService {
    removal: RemovalStrategy,
}

impl RecordService {
    /// Create a new record service
    pub fn new(removal: RemovalStrategy) -> Self {
        Self { removal }
    }

    /// Index of the first record whose id equals `id`
    pub fn position(records: &[Record], id: &str) -> Option<usize> {
        records.iter().position(|r| r.id == id)
    }

    /// First record whose id equals `id`
    pub fn find<'a>(&self, records: &'a [Record], id: &str) -> Option<&'a Record> {
        records.iter().find(|r| r.id == id)
    }

    /// Append `record` unless its id is already taken
    pub fn add(&self, records: &mut Vec<Record>, record: Record) -> AddOutcome {
        if Self::position(records, &record.id).is_some() {
            log::debug!("Record {} already present, not adding", record.id);
            return AddOutcome::AlreadyExists(record.id);
        }

        records.push(record);
        AddOutcome::Added
    }

    /// Remove the first record whose id equals `id`
    pub fn remove(&self, records: &mut Vec<Record>, id: &str) -> RemoveOutcome {
        let Some(index) = Self::position(records, id) else {
            return RemoveOutcome::NotFound(id.to_string());
        };

        log::debug!("Removing record {} at index {} ({})", id, index, self.removal);
        RemoveOutcome::Removed(self.removal.remove_at(records, index))
    }
}
