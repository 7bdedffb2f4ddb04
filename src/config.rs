//! Provider endpoints and client settings.
//!
//! Resolution order: built-in defaults, then `.env` / environment, then CLI flags
//! (applied by `app`).

use std::time::Duration;

use crate::data::StyleEndpoints;
use crate::data::transport::DEFAULT_TIMEOUT;
use crate::error::AppError;

pub const DEFAULT_SPECIES_URL: &str = "https://pokeapi.co/api/v2/pokemon-species/";
pub const DEFAULT_TRANSLATION_URL: &str = "https://api.funtranslations.com/translate/";

const ENV_SPECIES_URL: &str = "POKEDEX_SPECIES_URL";
const ENV_TRANSLATION_URL: &str = "POKEDEX_TRANSLATION_URL";
const ENV_CAVE_URL: &str = "POKEDEX_CAVE_URL";
const ENV_SHAKESPEARE_URL: &str = "POKEDEX_SHAKESPEARE_URL";
const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for species lookups; always ends with `/`.
    pub species_url: String,
    pub endpoints: StyleEndpoints,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            species_url: DEFAULT_SPECIES_URL.to_string(),
            endpoints: StyleEndpoints::from_base(DEFAULT_TRANSLATION_URL),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Values that override the environment, usually from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub species_url: Option<String>,
    pub translation_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env(overrides: &Overrides) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Build a config from a variable lookup plus explicit overrides.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>, overrides: &Overrides) -> Result<Self, AppError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let species_url = overrides
            .species_url
            .clone()
            .or_else(|| non_empty(ENV_SPECIES_URL))
            .unwrap_or_else(|| DEFAULT_SPECIES_URL.to_string());

        let translation_url = overrides
            .translation_url
            .clone()
            .or_else(|| non_empty(ENV_TRANSLATION_URL))
            .unwrap_or_else(|| DEFAULT_TRANSLATION_URL.to_string());

        let mut endpoints = StyleEndpoints::from_base(&with_trailing_slash(&translation_url));
        // An explicit translation base on the command line wins over per-style env values.
        if overrides.translation_url.is_none() {
            if let Some(url) = non_empty(ENV_CAVE_URL) {
                endpoints.cave = url;
            }
            if let Some(url) = non_empty(ENV_SHAKESPEARE_URL) {
                endpoints.shakespeare = url;
            }
        }

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match non_empty(ENV_TIMEOUT_SECS) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                    AppError::bad_request(format!("Invalid {ENV_TIMEOUT_SECS} '{raw}': {e}"))
                })?,
                None => DEFAULT_TIMEOUT.as_secs(),
            },
        };
        if timeout_secs == 0 {
            return Err(AppError::bad_request("Timeout must be at least 1 second."));
        }

        Ok(Self {
            species_url: with_trailing_slash(&species_url),
            endpoints,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn with_trailing_slash(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::resolve(env(&[]), &Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.endpoints.cave,
            "https://api.funtranslations.com/translate/yoda.json"
        );
    }

    #[test]
    fn environment_values_are_normalized() {
        let config = Config::resolve(
            env(&[
                (ENV_SPECIES_URL, "http://localhost:8080/species"),
                (ENV_TRANSLATION_URL, "http://localhost:8081/translate"),
                (ENV_TIMEOUT_SECS, " 3 "),
            ]),
            &Overrides::default(),
        )
        .unwrap();

        assert_eq!(config.species_url, "http://localhost:8080/species/");
        assert_eq!(config.endpoints.shakespeare, "http://localhost:8081/translate/shakespeare.json");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn per_style_urls_override_base() {
        let config = Config::resolve(
            env(&[(ENV_CAVE_URL, "http://cave.test/rewrite")]),
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(config.endpoints.cave, "http://cave.test/rewrite");
        assert_eq!(config.endpoints.shakespeare, format!("{DEFAULT_TRANSLATION_URL}shakespeare.json"));
    }

    #[test]
    fn overrides_beat_environment() {
        let overrides = Overrides {
            species_url: Some("http://flag.test/species/".to_string()),
            translation_url: Some("http://flag.test/translate/".to_string()),
            timeout_secs: Some(30),
        };
        let config = Config::resolve(
            env(&[
                (ENV_SPECIES_URL, "http://env.test/species/"),
                (ENV_CAVE_URL, "http://env.test/cave"),
                (ENV_TIMEOUT_SECS, "5"),
            ]),
            &overrides,
        )
        .unwrap();

        assert_eq!(config.species_url, "http://flag.test/species/");
        assert_eq!(config.endpoints.cave, "http://flag.test/translate/yoda.json");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn rejects_bad_timeouts() {
        let err = Config::resolve(env(&[(ENV_TIMEOUT_SECS, "soon")]), &Overrides::default()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_BAD_REQUEST);

        let err = Config::resolve(env(&[(ENV_TIMEOUT_SECS, "0")]), &Overrides::default()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_BAD_REQUEST);
    }
}
