//! userctl - user record store library
//!
//! This library provides the core functionality for managing user records
//! persisted as a single JSON array on disk.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output
//! - [`commands`]: Operation handlers and dispatcher
//! - [`config`]: Configuration system
//! - [`domain`]: Record type and related policies
//! - [`error`]: Error types
//! - [`services`]: Record operations over an in-memory sequence
//! - [`store`]: Loading and persisting the backing file

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
