//! JSON rendering style
//!
//! Shared by the store writer and the output stream.

use serde::Serialize;

/// How JSON documents are laid out when written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace
    #[default]
    Compact,
    /// Indented, one field per line
    Pretty,
}

impl JsonStyle {
    /// Select the style from a "pretty" switch
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }

    /// Serialize a value in this style
    pub fn render<T: Serialize + ?Sized>(self, value: &T) -> serde_json::Result<String> {
        match self {
            JsonStyle::Compact => serde_json::to_string(value),
            JsonStyle::Pretty => serde_json::to_string_pretty(value),
        }
    }
}
