//! Rendering a record for the terminal.

use crate::domain::{OutputFormat, SpeciesRecord};
use crate::error::AppError;

pub fn render(record: &SpeciesRecord, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)
            .map_err(|e| AppError::new(1, format!("Failed to serialize record: {e}"))),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

/// Human-readable summary. Provider line breaks are folded to spaces.
pub fn format_text(record: &SpeciesRecord) -> String {
    let description = record.description.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(
        "{}\n  habitat:   {}\n  legendary: {}\n  {}",
        record.name,
        record.habitat.as_deref().unwrap_or("unknown"),
        if record.is_legendary { "yes" } else { "no" },
        description
    )
}
