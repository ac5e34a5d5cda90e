//! User record domain type
//!
//! Provides the Record struct and its JSON encoding.

use crate::domain::JsonStyle;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user entry in the store
///
/// Absent fields decode to their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key within a store
    #[serde(default)]
    pub id: String,
    /// Contact email (not validated)
    #[serde(default)]
    pub email: String,
    /// Age in years (no range validation)
    #[serde(default)]
    pub age: i64,
}

impl Record {
    /// Create a new record
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode a record from JSON text
    ///
    /// Fails when the text is not valid JSON, a field has the wrong type,
    /// or the decoded id is empty. Missing fields are zero-filled.
    pub fn decode(text: &str) -> Result<Self, RecordError> {
        let record: Record = serde_json::from_str(text).map_err(RecordError::Decode)?;
        if record.id.is_empty() {
            return Err(RecordError::EmptyId);
        }
        Ok(record)
    }

    /// Encode this record as compact JSON text
    pub fn encode(&self) -> Result<String, RecordError> {
        self.encode_styled(JsonStyle::Compact)
    }

    /// Encode this record in the given JSON style
    pub fn encode_styled(&self, style: JsonStyle) -> Result<String, RecordError> {
        style.render(self).map_err(RecordError::Encode)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.id, self.email, self.age)
    }
}
