//! Store layer
//!
//! Loads the record sequence from its backing file and writes it back.
//! The [`RecordStore`] trait abstracts the backing file for testability.

pub mod file;
pub mod loader;
pub mod traits;
pub mod writer;

pub use file::FileStore;
pub use loader::{load, AccessMode, LoadedStore};
pub use traits::RecordStore;
pub use writer::persist;
