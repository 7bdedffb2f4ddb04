//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced by the species provider integration
//! - rewritten by the translation step
//! - printed as JSON by the CLI

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Habitat value that routes a description to the cave-dweller style.
pub const CAVE_HABITAT: &str = "cave";

/// Normalized result of a successful species lookup.
///
/// Only the species provider integration builds these from a parsed 2xx
/// response. The translation step never mutates a record in place; it returns
/// a new one via [`SpeciesRecord::with_description`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    /// Name as supplied by the caller (not the provider's casing).
    pub name: String,
    /// Free text; may contain line breaks and non-ASCII characters.
    pub description: String,
    /// Provider-defined habitat, when known.
    pub habitat: Option<String>,
    pub is_legendary: bool,
}

impl SpeciesRecord {
    /// Copy of this record with only the description replaced.
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn is_cave_dweller(&self) -> bool {
        self.habitat.as_deref() == Some(CAVE_HABITAT)
    }
}

/// Rewrite style requested from the translation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStyle {
    Cave,
    Shakespeare,
    /// Fallback when neither rule matches. Resolves to the Shakespeare endpoint.
    Default,
}

impl TranslationStyle {
    /// Pick a style for a record. First match wins:
    ///
    /// 1. habitat is `cave` -> `Cave`
    /// 2. legendary -> `Shakespeare`
    /// 3. otherwise -> `Default`
    pub fn for_record(record: &SpeciesRecord) -> Self {
        if record.is_cave_dweller() {
            TranslationStyle::Cave
        } else if record.is_legendary {
            TranslationStyle::Shakespeare
        } else {
            TranslationStyle::Default
        }
    }

    /// Lowercase label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            TranslationStyle::Cave => "cave",
            TranslationStyle::Shakespeare => "shakespeare",
            TranslationStyle::Default => "default",
        }
    }
}

/// How the CLI renders a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (`name`, `description`, `habitat`, `isLegendary`).
    Json,
    /// Human-readable summary.
    Text,
}
