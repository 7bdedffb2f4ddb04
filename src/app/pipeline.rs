//! Shared "lookup pipeline" logic.
//!
//! species fetch -> style selection -> translation (or pass-through)
//!
//! The CLI only decides how to print the result and which exit code to use.

use std::sync::Arc;

use crate::config::Config;
use crate::data::{DescriptionTranslator, HttpTransport, ReqwestTransport, SpeciesFetcher, TranslationObserver};
use crate::domain::SpeciesRecord;
use crate::error::{AppError, ProviderError};

/// Fetcher + translator wired to one transport.
///
/// Holds no per-request state, so a single instance can serve concurrent lookups.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: SpeciesFetcher,
    translator: DescriptionTranslator,
}

impl Pipeline {
    pub fn new(fetcher: SpeciesFetcher, translator: DescriptionTranslator) -> Self {
        Self { fetcher, translator }
    }

    /// Wire both providers to `transport` using the configured endpoints.
    pub fn with_transport(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        let fetcher = SpeciesFetcher::new(transport.clone(), config.species_url.clone());
        let translator = DescriptionTranslator::new(transport, config.endpoints.clone());
        Self::new(fetcher, translator)
    }

    /// Wire both providers to a real HTTP client.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(config.timeout).map_err(|e| AppError::bad_request(e.to_string()))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_observer(mut self, observer: Arc<dyn TranslationObserver>) -> Self {
        self.translator = self.translator.with_observer(observer);
        self
    }

    /// Fetch `name` and translate its description.
    ///
    /// Fetch errors are returned unchanged and skip translation. Translation
    /// problems never fail the lookup.
    pub fn run(&self, name: &str) -> Result<SpeciesRecord, ProviderError> {
        let record = self.fetcher.fetch(name)?;
        Ok(self.translator.translate(&record))
    }

    /// Fetch only, without translation.
    pub fn fetch(&self, name: &str) -> Result<SpeciesRecord, ProviderError> {
        self.fetcher.fetch(name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::CountingObserver;
    use crate::data::transport::TransportError;
    use crate::data::transport::scripted::ScriptedTransport;

    fn config() -> Config {
        Config::resolve(
            |key| match key {
                "POKEDEX_SPECIES_URL" => Some("https://species.test/pokemon-species/".to_string()),
                "POKEDEX_TRANSLATION_URL" => Some("https://translate.test/translate/".to_string()),
                _ => None,
            },
            &Default::default(),
        )
        .unwrap()
    }

    fn species_body(description: &str, habitat: Option<&str>, is_legendary: bool) -> String {
        json!({
            "is_legendary": is_legendary,
            "habitat": habitat.map(|h| json!({ "name": h })),
            "flavor_text_entries": [
                { "flavor_text": description, "language": { "name": "en" } }
            ]
        })
        .to_string()
    }

    fn translated_body(translated: &str, translation: &str) -> String {
        json!({
            "success": { "total": 1 },
            "contents": { "translated": translated, "text": "...", "translation": translation }
        })
        .to_string()
    }

    fn pipeline(transport: &Arc<ScriptedTransport>) -> (Pipeline, Arc<CountingObserver>) {
        let counter = Arc::new(CountingObserver::new());
        let pipeline = Pipeline::with_transport(&config(), transport.clone()).with_observer(counter.clone());
        (pipeline, counter)
    }

    #[test]
    fn mewtwo_is_translated_to_shakespeare() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(
                    200,
                    species_body(
                        "It was created by a scientist after years of horrific gene splicing and DNA engineering experiments. Mewtwo is the pokémon created by genetic manipulation.",
                        None,
                        true,
                    ),
                )
                .reply(
                    200,
                    translated_body(
                        "'t wast did create by a scientist after years of horrific gene splicing and dna engineering experiments. Mewtwo is the pokémon yond wast did create by genetic manipulation.",
                        "shakespeare",
                    ),
                ),
        );
        let (pipeline, counter) = pipeline(&transport);

        let record = pipeline.run("mewtwo").unwrap();

        assert_eq!(record.name, "mewtwo");
        assert_eq!(record.habitat, None);
        assert!(record.is_legendary);
        assert!(record.description.contains("pokémon yond wast did create"));
        assert_eq!(
            transport.urls(),
            vec![
                "https://species.test/pokemon-species/mewtwo".to_string(),
                "https://translate.test/translate/shakespeare.json".to_string(),
            ]
        );
        assert_eq!(counter.translated(), 1);
    }

    #[test]
    fn success_keeps_provider_fields() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, species_body("Obviously prefers\nhot places.", Some("mountain"), false))
                .reply(200, translated_body("Obviously prefers hot places, verily.", "shakespeare")),
        );
        let (pipeline, _) = pipeline(&transport);

        let record = pipeline.run("charizard").unwrap();

        assert_eq!(record.name, "charizard");
        assert_eq!(record.habitat.as_deref(), Some("mountain"));
        assert!(!record.is_legendary);
        assert_eq!(record.description, "Obviously prefers hot places, verily.");
    }

    #[test]
    fn not_found_short_circuits() {
        let transport = Arc::new(ScriptedTransport::new().reply(404, "Not Found"));
        let (pipeline, counter) = pipeline(&transport);

        let err = pipeline.run("missingno").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(counter.translated() + counter.degraded(), 0);
    }

    #[test]
    fn unavailable_species_provider_short_circuits() {
        let transport = Arc::new(ScriptedTransport::new().fail(TransportError::Connect {
            url: "https://species.test/pokemon-species/pikachu".to_string(),
            message: "connection refused".to_string(),
        }));
        let (pipeline, _) = pipeline(&transport);

        let err = pipeline.run("pikachu").unwrap_err();

        assert!(matches!(err, ProviderError::UpstreamUnavailable { .. }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn translation_failure_keeps_original_description() {
        let description = "When several of\nthese POKéMON gather, their\u{c}electricity could build.";
        for reply in [
            (429, translated_body("ignored", "shakespeare")),
            (500, "Internal Server Error".to_string()),
            (200, "{\"success\": {\"total\": 1}}".to_string()),
        ] {
            let transport = Arc::new(
                ScriptedTransport::new()
                    .reply(200, species_body(description, Some("forest"), false))
                    .reply(reply.0, reply.1),
            );
            let (pipeline, counter) = pipeline(&transport);

            let record = pipeline.run("pikachu").unwrap();

            assert_eq!(record.description, description);
            assert_eq!(record.habitat.as_deref(), Some("forest"));
            assert!(!record.is_legendary);
            assert_eq!(counter.degraded(), 1);
        }
    }

    #[test]
    fn style_selection_picks_configured_urls() {
        let cases = [
            (Some("cave"), true, "https://translate.test/translate/yoda.json"),
            (Some("cave"), false, "https://translate.test/translate/yoda.json"),
            (Some("rare"), true, "https://translate.test/translate/shakespeare.json"),
            (Some("grassland"), false, "https://translate.test/translate/shakespeare.json"),
            (None, false, "https://translate.test/translate/shakespeare.json"),
        ];
        for (habitat, is_legendary, expected) in cases {
            let transport = Arc::new(
                ScriptedTransport::new()
                    .reply(200, species_body("text", habitat, is_legendary))
                    .reply(200, translated_body("rewritten", "any")),
            );
            let (pipeline, _) = pipeline(&transport);

            pipeline.run("sample").unwrap();

            assert_eq!(transport.urls()[1], expected, "habitat {habitat:?}, legendary {is_legendary}");
        }
    }

    #[test]
    fn fetch_only_skips_translation() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, species_body("Raw.", None, false)));
        let (pipeline, _) = pipeline(&transport);

        let record = pipeline.fetch("ditto").unwrap();

        assert_eq!(record.description, "Raw.");
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn concurrent_lookups_share_one_pipeline() {
        use crate::data::{HttpRequest, HttpResponse};

        // Answers species requests by echoing the name as the description.
        struct EchoTransport;

        impl HttpTransport for EchoTransport {
            fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
                match request.body.as_ref() {
                    None => {
                        let name = request.url.rsplit('/').next().unwrap_or_default();
                        Ok(HttpResponse::new(200, species_body(name, None, false)))
                    }
                    Some(body) => {
                        let text = body["text"].as_str().unwrap_or_default().to_uppercase();
                        Ok(HttpResponse::new(200, translated_body(&text, "shakespeare")))
                    }
                }
            }
        }

        let counter = Arc::new(CountingObserver::new());
        let pipeline = Pipeline::with_transport(&config(), Arc::new(EchoTransport)).with_observer(counter.clone());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let pipeline = &pipeline;
                    scope.spawn(move || pipeline.run(&format!("species{i}")).unwrap())
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let record = handle.join().unwrap();
                assert_eq!(record.name, format!("species{i}"));
                assert_eq!(record.description, format!("SPECIES{i}"));
            }
        });

        assert_eq!(counter.translated(), 8);
    }
}
