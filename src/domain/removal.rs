//! Record removal strategy
//!
//! Selects how a record is taken out of the store sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the remove operation closes the gap left by a removed record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalStrategy {
    /// Shift the following records left; order is preserved
    #[default]
    Stable,
    /// Move the last record into the hole; order is not preserved
    Swap,
}

impl RemovalStrategy {
    /// Remove the record at `index` from `records` and return it
    pub fn remove_at<T>(self, records: &mut Vec<T>, index: usize) -> T {
        match self {
            RemovalStrategy::Stable => records.remove(index),
            RemovalStrategy::Swap => records.swap_remove(index),
        }
    }
}

impl fmt::Display for RemovalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalStrategy::Stable => write!(f, "stable"),
            RemovalStrategy::Swap => write!(f, "swap"),
        }
    }
}
