//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves provider configuration
//! - runs the lookup pipeline
//! - prints the record, or returns an `AppError` whose exit code encodes the outcome

use clap::Parser;

use crate::cli::{Command, GlobalArgs};
use crate::config::{Config, Overrides};
use crate::error::AppError;

pub mod pipeline;

pub use pipeline::Pipeline;

/// Entry point for the `pokedex` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    crate::logging::init(cli.global.verbose);

    let config = Config::from_env(&overrides_from_args(&cli.global))?;
    tracing::debug!(species_url = %config.species_url, timeout = ?config.timeout, "configuration resolved");
    let pipeline = Pipeline::from_config(&config)?;

    let (name, translate) = match &cli.command {
        Command::Lookup(args) => (args.name.as_str(), true),
        Command::Species(args) => (args.name.as_str(), false),
    };
    let name = validate_name(name)?;

    let record = if translate {
        pipeline.run(name)?
    } else {
        pipeline.fetch(name)?
    };

    println!("{}", crate::report::render(&record, cli.global.format)?);
    Ok(())
}

pub fn overrides_from_args(args: &GlobalArgs) -> Overrides {
    Overrides {
        species_url: args.species_url.clone(),
        translation_url: args.translation_url.clone(),
        timeout_secs: args.timeout,
    }
}

/// Reject blank names before any request is made.
pub fn validate_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Species name must not be empty."));
    }
    Ok(trimmed)
}

/// Rewrite argv so `pokedex <NAME>` means `pokedex lookup <NAME>`.
///
/// Rules:
/// - `pokedex mewtwo ...`           -> `pokedex lookup mewtwo ...`
/// - `pokedex --help/--version/-h`  -> unchanged
/// - `pokedex lookup|species ...`   -> unchanged
/// - leading flags are skipped when looking for the first positional
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let Some(pos) = first_positional(&argv) else {
        return argv;
    };
    let is_subcommand = matches!(argv[pos].as_str(), "lookup" | "species" | "help");
    if !is_subcommand {
        argv.insert(pos, "lookup".to_string());
    }
    argv
}

/// Index of the first argument that is not a flag or a flag's value.
fn first_positional(argv: &[String]) -> Option<usize> {
    const TAKES_VALUE: [&str; 4] = ["--species-url", "--translation-url", "--timeout", "--format"];

    let mut i = 1;
    while i < argv.len() {
        let arg = argv[i].as_str();
        if !arg.starts_with('-') || arg == "-" {
            return Some(i);
        }
        i += if TAKES_VALUE.contains(&arg) { 2 } else { 1 };
    }
    None
}
