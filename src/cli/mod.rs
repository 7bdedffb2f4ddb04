//! Command-line parsing for the species lookup tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! provider and pipeline code.

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about = "Species lookup with stylized descriptions")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a species and translate its description.
    Lookup(LookupArgs),
    /// Look up a species without translating (useful for checking the species provider).
    Species(LookupArgs),
}

#[derive(Debug, Args, Clone)]
pub struct LookupArgs {
    /// Species name, e.g. `mewtwo`.
    pub name: String,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Species provider base URL (overrides POKEDEX_SPECIES_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub species_url: Option<String>,

    /// Translation provider base URL (overrides POKEDEX_TRANSLATION_URL and per-style URLs).
    #[arg(long, global = true, value_name = "URL")]
    pub translation_url: Option<String>,

    /// Per-request timeout in seconds (overrides POKEDEX_TIMEOUT_SECS).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
