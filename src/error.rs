//! Unified error types for userctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A flag required by the selected operation was not given
    #[error("-{0} flag has to be specified")]
    MissingArgument(&'static str),

    /// The operation name is not one of add, remove, list, findById
    #[error("Operation {0} not allowed!")]
    InvalidOperation(String),

    /// Error from record encoding/decoding
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Error from reading or writing the backing file
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output document could not be serialized
    #[error("marshal error: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error (output stream)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from encoding or decoding a single record
#[derive(Error, Debug)]
pub enum RecordError {
    /// Text is not valid JSON or the fields have the wrong types
    #[error("Failed to decode record: {0}")]
    Decode(#[source] serde_json::Error),

    /// Record could not be serialized
    #[error("Failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    /// Record decoded fine but carries no identifier
    #[error("Record id must not be empty")]
    EmptyId,
}

/// Errors from the backing file
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be opened or created
    #[error("can't open file [{path}], error: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be read
    #[error("can't read file [{path}], error: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written
    #[error("can't write file [{path}], error: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a JSON array of records
    #[error("unmarshal error in [{path}]: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized
    #[error("marshal error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A write was attempted through a store opened read-only
    #[error("store [{0}] was not opened for writing")]
    ReadOnly(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
