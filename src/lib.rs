//! `pokedex` library crate.
//!
//! The binary (`pokedex`) is a thin wrapper around this library so that:
//!
//! - the lookup pipeline is testable without spawning processes or touching the network
//! - the pipeline can be embedded behind another front-end (HTTP handler, daemon, etc.)

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;
