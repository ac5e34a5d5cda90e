//! Remove command implementation
//!
//! Removes the first record with a given id.

use crate::cli::output::{write_notice, Notice};
use crate::error::Result;
use crate::services::{RecordService, RemoveOutcome};
use crate::store::RecordStore;

use std::io::Write;

/// Execute the remove command
pub fn run_remove<S, W>(store: &mut S, service: &RecordService, id: &str, out: &mut W) -> Result<()>
where
    S: RecordStore,
    W: Write,
{
    let mut records = store.read()?;

    match service.remove(&mut records, id) {
        RemoveOutcome::Removed(_) => store.write(&records)?,
        RemoveOutcome::NotFound(id) => write_notice(out, &Notice::NotFound(id))?,
    }

    Ok(())
}
