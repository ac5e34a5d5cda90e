//! Parsed invocation and request validation
//!
//! Turns the raw option values into a validated [`Request`].

use crate::cli::args::Cli;
use crate::config::Config;
use crate::domain::Record;
use crate::error::{AppError, RecordError, Result};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Operation named by the `operation` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    List,
    FindById,
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            other => Err(AppError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Remove => write!(f, "remove"),
            Operation::List => write!(f, "list"),
            Operation::FindById => write!(f, "findById"),
        }
    }
}

/// Raw option values for one run, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub operation: Option<String>,
    pub item: Option<String>,
    pub file_name: Option<String>,
    pub id: Option<String>,
}

/// What a validated request does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(Record),
    Remove(String),
    List,
    FindById(String),
}

/// A validated operation together with its backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub file_name: PathBuf,
    pub action: Action,
}

impl Invocation {
    /// Collect option values from parsed arguments
    ///
    /// The file name comes from the merged configuration, which already
    /// holds the CLI/env value when one was given.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            operation: cli.operation.clone(),
            item: cli.item.clone(),
            file_name: config.store.file_name.clone(),
            id: cli.id.clone(),
        }
    }

    /// Validate the options and build a request
    ///
    /// Checks run in order: file name, operation, operation name, then the
    /// option the operation needs. Empty values count as absent.
    pub fn into_request(self) -> Result<Request> {
        let file_name = required(self.file_name, "fileName")?;
        let operation: Operation = required(self.operation, "operation")?.parse()?;

        let action = match operation {
            Operation::Add => {
                let item = required(self.item, "item")?;
                // An item without an id counts as no item at all
                match Record::decode(&item) {
                    Ok(record) => Action::Add(record),
                    Err(RecordError::EmptyId) => return Err(AppError::MissingArgument("item")),
                    Err(e) => return Err(e.into()),
                }
            }
            Operation::Remove => Action::Remove(required(self.id, "id")?),
            Operation::List => Action::List,
            Operation::FindById => Action::FindById(required(self.id, "id")?),
        };

        Ok(Request {
            file_name: PathBuf::from(file_name),
            action,
        })
    }
}

fn required(value: Option<String>, flag: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingArgument(flag))
}
