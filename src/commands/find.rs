//! Find command implementation
//!
//! Looks up a record by id. A miss writes nothing.

use crate::domain::JsonStyle;
use crate::error::Result;
use crate::services::RecordService;
use crate::store::RecordStore;

use std::io::Write;

/// Execute the findById command
pub fn run_find<S, W>(
    store: &S,
    service: &RecordService,
    id: &str,
    style: JsonStyle,
    out: &mut W,
) -> Result<()>
where
    S: RecordStore,
    W: Write,
{
    let records = store.read()?;

    match service.find(&records, id) {
        Some(record) => out.write_all(record.encode_styled(style)?.as_bytes())?,
        None => log::debug!("No record with id {} in {}", id, store.location()),
    }

    Ok(())
}
