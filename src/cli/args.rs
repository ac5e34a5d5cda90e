//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments. Flags are accepted both in the
//! single-dash form (`-operation add`) and the double-dash form
//! (`--operation add`); see [`normalize_args`].

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::ffi::OsString;

/// Long flag names that may be written with a single dash
const LONG_FLAGS: &[&str] = &[
    "operation",
    "item",
    "fileName",
    "id",
    "verbose",
    "config",
    "pretty",
    "completions",
    "help",
    "version",
];

/// Manage user records stored in a JSON file
///
/// Add, remove, list and look up records of the form
/// {"id": "...", "email": "...", "age": N}.
#[derive(Parser, Debug)]
#[command(name = "userctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to perform: add, remove, list or findById
    #[arg(long, value_name = "OPERATION")]
    pub operation: Option<String>,

    /// Record to add, as JSON: {"id":"1","email":"test@test.com","age":31}
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Path of the JSON file holding the records
    #[arg(long = "fileName", value_name = "PATH", env = "USERCTL_FILE")]
    pub file_name: Option<String>,

    /// Record id for remove and findById
    #[arg(long, value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "USERCTL_CONFIG")]
    pub config: Option<String>,

    /// Pretty-print JSON output and the stored file
    #[arg(long)]
    pub pretty: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Rewrite single-dash long flags (`-fileName x`, `-id=2`) to double-dash
///
/// Only names in the known flag list are rewritten, so short flags such as
/// `-v` and values such as `-5` pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let rewritten = arg
                .to_str()
                .filter(|s| is_single_dash_long(s))
                .map(|s| OsString::from(format!("-{}", s)));
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
