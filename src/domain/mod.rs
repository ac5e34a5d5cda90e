//! Domain models for userctl
//!
//! This module contains the record type and the policies that act on it.

pub mod record;
pub mod removal;
pub mod style;

pub use record::Record;
pub use removal::RemovalStrategy;
pub use style::JsonStyle;
