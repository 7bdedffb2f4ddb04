//! Translation provider integration (FunTranslations).
//!
//! The translator never fails outward: any problem with the provider returns the
//! input record unchanged and is reported to the configured observer instead.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::data::observer::{FallbackReason, LogObserver, TranslationObserver, TranslationOutcome};
use crate::data::transport::{HttpRequest, HttpTransport};
use crate::domain::{SpeciesRecord, TranslationStyle};

/// Endpoint per style. `Default` shares the Shakespeare endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEndpoints {
    pub cave: String,
    pub shakespeare: String,
}

impl StyleEndpoints {
    /// Derive endpoints from the provider's base URL (`.../translate/`).
    pub fn from_base(base_url: &str) -> Self {
        Self {
            cave: format!("{base_url}yoda.json"),
            shakespeare: format!("{base_url}shakespeare.json"),
        }
    }

    pub fn url_for(&self, style: TranslationStyle) -> &str {
        match style {
            TranslationStyle::Cave => &self.cave,
            TranslationStyle::Shakespeare | TranslationStyle::Default => &self.shakespeare,
        }
    }
}

#[derive(Clone)]
pub struct DescriptionTranslator {
    transport: Arc<dyn HttpTransport>,
    endpoints: StyleEndpoints,
    observer: Arc<dyn TranslationObserver>,
}

impl DescriptionTranslator {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoints: StyleEndpoints) -> Self {
        Self {
            transport,
            endpoints,
            observer: Arc::new(LogObserver),
        }
    }

    /// Replace the default `LogObserver`.
    pub fn with_observer(mut self, observer: Arc<dyn TranslationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn endpoints(&self) -> &StyleEndpoints {
        &self.endpoints
    }

    /// Rewrite the record's description in the style its habitat/legendary flag selects.
    ///
    /// Falls back to a copy of `record` on any failure.
    pub fn translate(&self, record: &SpeciesRecord) -> SpeciesRecord {
        let style = TranslationStyle::for_record(record);

        let (result, outcome) = match self.request(style, &record.description) {
            Ok(translated) => (
                record.with_description(translated),
                TranslationOutcome::Translated { style },
            ),
            Err(reason) => (record.clone(), TranslationOutcome::Degraded { style, reason }),
        };

        self.observer.observe(&outcome);
        result
    }

    fn request(&self, style: TranslationStyle, text: &str) -> Result<String, FallbackReason> {
        let url = self.endpoints.url_for(style);
        tracing::debug!(%url, style = style.label(), "requesting translation");

        let resp = self
            .transport
            .send(&HttpRequest::post_json(url, json!({ "text": text })))
            .map_err(|e| FallbackReason::Transport(e.to_string()))?;

        if !resp.is_success() {
            return Err(FallbackReason::Status(resp.status));
        }

        parse_translation(&resp.body)
    }
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    success: Option<SuccessBlock>,
    contents: Option<Contents>,
    error: Option<ProviderFailure>,
}

#[derive(Debug, Deserialize)]
struct SuccessBlock {
    total: u32,
}

#[derive(Debug, Deserialize)]
struct Contents {
    translated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderFailure {
    code: Option<u32>,
    message: Option<String>,
}

/// Extract the translated text from a 2xx body.
fn parse_translation(body: &str) -> Result<String, FallbackReason> {
    let parsed: TranslationResponse =
        serde_json::from_str(body).map_err(|e| FallbackReason::MalformedBody(e.to_string()))?;

    if let Some(err) = parsed.error {
        return Err(FallbackReason::ProviderFailure(format!(
            "code {}: {}",
            err.code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string()),
            err.message.unwrap_or_default()
        )));
    }

    let total = parsed
        .success
        .ok_or_else(|| FallbackReason::MalformedBody("missing success block".to_string()))?
        .total;
    if total == 0 {
        return Err(FallbackReason::ProviderFailure("success.total is 0".to_string()));
    }

    parsed
        .contents
        .and_then(|c| c.translated)
        .ok_or_else(|| FallbackReason::MalformedBody("missing contents.translated".to_string()))
}
