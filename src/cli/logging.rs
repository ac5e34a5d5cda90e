//! Logger setup
//!
//! Builds the env_logger used by the binary.

use log::LevelFilter;

/// Logger builder honouring `RUST_LOG`, defaulting to `warn`
///
/// With `verbose` set, debug records are emitted regardless of `RUST_LOG`.
pub fn logger(verbose: bool) -> env_logger::Builder {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder
}
