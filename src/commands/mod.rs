//! Command handlers
//!
//! Each command handler orchestrates one operation: read the store, apply
//! the record operation, then persist or write to the output stream.

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

pub use add::run_add;
pub use find::run_find;
pub use list::run_list;
pub use remove::run_remove;

use crate::cli::{Action, Request};
use crate::config::Config;
use crate::domain::JsonStyle;
use crate::error::Result;
use crate::services::RecordService;
use crate::store::{FileStore, RecordStore};

use std::io::Write;

/// Execute a validated request against its backing file
pub fn perform<W: Write>(request: Request, config: &Config, out: &mut W) -> Result<()> {
    let style = config.output.json_style();
    let mut store = FileStore::new(&request.file_name, style);
    let service = RecordService::new(config.store.removal);

    dispatch(request.action, &mut store, &service, style, out)
}

/// Route an action to its handler
pub fn dispatch<S, W>(
    action: Action,
    store: &mut S,
    service: &RecordService,
    style: JsonStyle,
    out: &mut W,
) -> Result<()>
where
    S: RecordStore,
    W: Write,
{
    match action {
        Action::Add(record) => run_add(store, service, record, out),
        Action::Remove(id) => run_remove(store, service, &id, out),
        Action::List => run_list(store, style, out),
        Action::FindById(id) => run_find(store, service, &id, style, out),
    }
}
