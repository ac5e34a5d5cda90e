//! List command implementation
//!
//! Writes every stored record as one JSON array.

use crate::cli::output::write_json;
use crate::domain::JsonStyle;
use crate::error::Result;
use crate::store::RecordStore;

use std::io::Write;

/// Execute the list command
pub fn run_list<S: RecordStore, W: Write>(store: &S, style: JsonStyle, out: &mut W) -> Result<()> {
    let records = store.read()?;
    log::debug!("Listing {} record(s) from {}", records.len(), store.location());
    write_json(out, &records, style)
}
