//! Trait definitions for record storage
//!
//! These traits abstract over the backing file to enable testing with mocks.

use crate::domain::Record;
use crate::error::StoreError;

/// Trait for a store holding an ordered sequence of records
///
/// Every call works on the whole sequence: `read` reconstructs it from
/// scratch and `write` replaces it entirely.
pub trait RecordStore {
    /// Human-readable location of the store (used in logs and errors)
    fn location(&self) -> &str;

    /// Read the full record sequence
    ///
    /// An empty store yields an empty sequence.
    fn read(&self) -> Result<Vec<Record>, StoreError>;

    /// Replace the stored sequence with `records`
    fn write(&mut self, records: &[Record]) -> Result<(), StoreError>;
}
