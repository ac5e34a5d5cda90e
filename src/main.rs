//! userctl - user record store CLI
//!
//! A command-line tool for adding, removing, listing and looking up user
//! records kept in a JSON file.

use clap::Parser;
use userctl::cli::args::{generate_completions, normalize_args, Cli};
use userctl::cli::logging::logger;
use userctl::cli::Invocation;
use userctl::commands::perform;
use userctl::config::{Config, ConfigBuilder};
use userctl::error::{AppError, RecordError};

use std::io::{self, IsTerminal, Write};

fn main() {
    // Parse CLI arguments, accepting single-dash long flags
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    // Config comes first so that general.verbose can drive the logger
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let builder = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_file_name(cli.file_name.clone())
        .with_pretty(cli.pretty.then_some(true));
    let source = builder.source().clone();
    let config = builder.build();

    logger(config.general.verbose).init();
    log::info!("Using configuration from {}", source);

    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let request = Invocation::from_cli(cli, config).into_request()?;
    log::debug!("Request: {:?}", request);

    let mut output = Vec::new();
    perform(request, config, &mut output)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(&output)?;
    // Output is written verbatim; only an interactive terminal gets a newline
    if !output.is_empty() && handle.is_terminal() {
        writeln!(handle)?;
    }
    handle.flush()?;

    Ok(())
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::MissingArgument(_) | AppError::InvalidOperation(_) => {
            eprintln!();
            eprintln!("Usage: userctl -operation <add|remove|list|findById> -fileName <path>");
            eprintln!("       [-item <json>] [-id <id>]");
        }
        AppError::Record(RecordError::Decode(_)) => {
            eprintln!();
            eprintln!(
                "Hint: -item must be a JSON object such as {}",
                r#"{"id":"1","email":"test@test.com","age":31}"#
            );
        }
        _ => {}
    }
}
