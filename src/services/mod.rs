//! Service layer for record operations
//!
//! Services encapsulate the business logic applied to the record sequence.

pub mod record_service;

pub use record_service::{AddOutcome, RecordService, RemoveOutcome};
