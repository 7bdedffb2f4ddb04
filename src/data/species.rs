//! Species provider integration (PokeAPI `pokemon-species`).

use std::sync::Arc;

use serde::Deserialize;

use crate::data::transport::{HttpRequest, HttpTransport};
use crate::domain::SpeciesRecord;
use crate::error::ProviderError;

/// Preferred language for the flavor text used as the description.
const DESCRIPTION_LANGUAGE: &str = "en";

/// Looks up one species per call against the configured base endpoint.
#[derive(Clone)]
pub struct SpeciesFetcher {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl SpeciesFetcher {
    /// `base_url` is used as a prefix; the encoded name is appended to it.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn lookup_url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(name))
    }

    /// Fetch and normalize one species.
    ///
    /// Does not validate `name`; empty input is rejected by the caller.
    pub fn fetch(&self, name: &str) -> Result<SpeciesRecord, ProviderError> {
        let url = self.lookup_url(name);
        tracing::debug!(%url, "fetching species");

        let resp = self
            .transport
            .send(&HttpRequest::get(&url))
            .map_err(|e| ProviderError::unavailable(e.to_string()))?;

        if resp.status == 404 {
            return Err(ProviderError::NotFound {
                name: name.to_string(),
            });
        }
        if !resp.is_success() {
            return Err(ProviderError::unavailable(format!(
                "species request failed with status {}",
                resp.status
            )));
        }

        let record = parse_species(name, &resp.body)?;
        tracing::debug!(
            name = %record.name,
            habitat = record.habitat.as_deref().unwrap_or("-"),
            is_legendary = record.is_legendary,
            "species fetched"
        );
        Ok(record)
    }
}

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextEntry>,
    habitat: Option<NamedResource>,
    #[serde(default)]
    is_legendary: bool,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

/// Parse a species payload into a record for `name`.
///
/// The description is the first English flavor text, falling back to the first
/// entry in any language. A payload without any flavor text has no description
/// and is rejected.
fn parse_species(name: &str, body: &str) -> Result<SpeciesRecord, ProviderError> {
    let parsed: SpeciesResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::unavailable(format!("failed to parse species response: {e}")))?;

    let entries = &parsed.flavor_text_entries;
    let description = entries
        .iter()
        .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
        .or_else(|| entries.first())
        .map(|entry| entry.flavor_text.clone())
        .ok_or_else(|| ProviderError::unavailable("species response has no description"))?;

    Ok(SpeciesRecord {
        name: name.to_string(),
        description,
        habitat: parsed.habitat.map(|h| h.name),
        is_legendary: parsed.is_legendary,
    })
}
