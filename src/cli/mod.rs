//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod invocation;
pub mod logging;
pub mod output;

pub use args::{normalize_args, Cli};
pub use invocation::{Action, Invocation, Operation, Request};
