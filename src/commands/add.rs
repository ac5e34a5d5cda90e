//! Add command implementation
//!
//! Appends a record unless its id is already taken.

use crate::cli::output::{write_notice, Notice};
use crate::domain::Record;
use crate::error::Result;
use crate::services::{AddOutcome, RecordService};
use crate::store::RecordStore;

use std::io::Write;

/// Execute the add command
pub fn run_add<S, W>(
    store: &mut S,
    service: &RecordService,
    record: Record,
    out: &mut W,
) -> Result<()>
where
    S: RecordStore,
    W: Write,
{
    let mut records = store.read()?;
    log::debug!("Adding record {}", record);

    match service.add(&mut records, record) {
        AddOutcome::Added => store.write(&records)?,
        AddOutcome::AlreadyExists(id) => write_notice(out, &Notice::AlreadyExists(id))?,
    }

    Ok(())
}
