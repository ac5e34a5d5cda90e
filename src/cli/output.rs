//! Output formatting utilities
//!
//! Writes JSON documents and plain-text notices to the output stream.
//! Nothing here appends a line terminator; output is written verbatim.

use crate::domain::JsonStyle;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Plain-text notice for an operation that left the store unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// add found the id already present
    AlreadyExists(String),
    /// remove did not find the id
    NotFound(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AlreadyExists(id) => write!(f, "Item with id {} already exists", id),
            Notice::NotFound(id) => write!(f, "Item with id {} not found", id),
        }
    }
}

/// Write `value` as one JSON document
pub fn write_json<W, T>(out: &mut W, value: &T, style: JsonStyle) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let json = style.render(value)?;
    out.write_all(json.as_bytes())?;
    Ok(())
}

/// Write a notice line
pub fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> Result<()> {
    write!(out, "{}", notice)?;
    Ok(())
}
