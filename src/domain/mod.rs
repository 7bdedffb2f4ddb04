//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the normalized species record (`SpeciesRecord`)
//! - the translation style policy (`TranslationStyle`)
//! - CLI-facing enums (`OutputFormat`)

pub mod types;

pub use types::*;
