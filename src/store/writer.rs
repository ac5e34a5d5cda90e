//! Store writing
//!
//! Serializes the whole record sequence over an open handle.

use crate::domain::{JsonStyle, Record};
use crate::error::StoreError;

use std::io::Write;

/// Write `records` as a single JSON array to `out` and flush it
///
/// `location` is only used to label errors.
pub fn persist<W: Write>(
    out: &mut W,
    location: &str,
    records: &[Record],
    style: JsonStyle,
) -> Result<(), StoreError> {
    let data = style.render(records).map_err(StoreError::Encode)?;

    let write_err = |source| StoreError::Write {
        path: location.to_string(),
        source,
    };
    out.write_all(data.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    log::debug!("Wrote {} record(s) to {}", records.len(), location);
    Ok(())
}
