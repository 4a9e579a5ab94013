//! Catalog configuration
//!
//! Loaded from JSON (camelCase keys, every key optional) and then optionally
//! overridden from the environment:
//!
//! | Variable            | Field      |
//! |---------------------|------------|
//! | `POKEDEX_BASE_URL`  | `baseUrl`  |
//! | `POKEDEX_PAGE_SIZE` | `pageSize` |

use pokedex_provider::{ClientOptions, DEFAULT_BASE_URL, MAX_PAGE_LIMIT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// Placeholder replaced by the catalog number in [`PokedexConfig::sprite_url_template`].
pub const NUMBER_PLACEHOLDER: &str = "{number}";

/// Official artwork sprites hosted alongside the API.
pub const DEFAULT_SPRITE_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{number}.png";

/// Entries requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub const ENV_BASE_URL: &str = "POKEDEX_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "POKEDEX_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PokedexConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2/`
    pub base_url: String,
    /// Entries per list page, at most [`MAX_PAGE_LIMIT`]
    pub page_size: u32,
    /// Sprite URL with a `{number}` placeholder
    pub sprite_url_template: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{DEFAULT_BASE_URL}/"),
            page_size: DEFAULT_PAGE_SIZE,
            sprite_url_template: DEFAULT_SPRITE_URL_TEMPLATE.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl PokedexConfig {
    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Blank values are ignored. A page size that does not parse is an error
    /// rather than a silent fallback.
    pub fn apply_overrides<F>(mut self, lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            log::debug!("{ENV_BASE_URL} overrides baseUrl: {base_url}");
            self.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE).filter(|v| !v.trim().is_empty()) {
            self.page_size = raw.trim().parse().map_err(|_| {
                CoreError::InvalidConfig(format!("{ENV_PAGE_SIZE} is not a number: {raw}"))
            })?;
            log::debug!("{ENV_PAGE_SIZE} overrides pageSize: {}", self.page_size);
        }

        Ok(self)
    }

    /// [`apply_overrides`](Self::apply_overrides) against the process environment.
    pub fn with_env_overrides(self) -> CoreResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Reject values the catalog cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "pageSize must be greater than 0".to_string(),
            ));
        }
        if self.page_size > MAX_PAGE_LIMIT {
            return Err(CoreError::InvalidConfig(format!(
                "pageSize must be at most {MAX_PAGE_LIMIT}, got {}",
                self.page_size
            )));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            CoreError::InvalidConfig(format!("baseUrl '{}' is not a URL: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidConfig(format!(
                "baseUrl must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if !self.sprite_url_template.contains(NUMBER_PLACEHOLDER) {
            return Err(CoreError::InvalidConfig(format!(
                "spriteUrlTemplate must contain {NUMBER_PLACEHOLDER}"
            )));
        }

        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidConfig(
                "timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Connection settings for the API client.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }

    pub fn sprite_url(&self, number: u32) -> String {
        sprite_url(&self.sprite_url_template, number)
    }
}

/// Substitute `number` into a sprite URL template.
pub fn sprite_url(template: &str, number: u32) -> String {
    template.replace(NUMBER_PLACEHOLDER, &number.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = PokedexConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/");
        assert_eq!(config.page_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sprite_url_substitutes_number() {
        let config = PokedexConfig::default();
        assert_eq!(
            config.sprite_url(25),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
        );
    }

    #[test]
    fn from_json_partial_keeps_defaults() {
        let config = PokedexConfig::from_json(r#"{"pageSize": 50}"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.base_url, PokedexConfig::default().base_url);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = PokedexConfig::from_json("{pageSize").unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }

    #[test]
    fn overrides_apply() {
        let config = PokedexConfig::default()
            .apply_overrides(lookup(&[
                (ENV_BASE_URL, " http://localhost:8080/api/v2 "),
                (ENV_PAGE_SIZE, "40"),
            ]))
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.page_size, 40);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = PokedexConfig::default()
            .apply_overrides(lookup(&[(ENV_BASE_URL, "  "), (ENV_PAGE_SIZE, "")]))
            .unwrap();
        assert_eq!(config, PokedexConfig::default());
    }

    #[test]
    fn bad_page_size_override_is_an_error() {
        let err = PokedexConfig::default()
            .apply_overrides(lookup(&[(ENV_PAGE_SIZE, "twenty")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let config = PokedexConfig {
            page_size: 0,
            ..PokedexConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn validate_caps_page_size_at_api_limit() {
        let at_limit = PokedexConfig {
            page_size: MAX_PAGE_LIMIT,
            ..PokedexConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let config = PokedexConfig::from_json(r#"{"pageSize": 5000}"#).unwrap();
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let config = PokedexConfig {
            base_url: "ftp://pokeapi.co/".to_string(),
            ..PokedexConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PokedexConfig {
            base_url: "not a url".to_string(),
            ..PokedexConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_placeholder() {
        let config = PokedexConfig {
            sprite_url_template: "https://img.example/sprite.png".to_string(),
            ..PokedexConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn client_options_carry_connection_settings() {
        let options = PokedexConfig::default().client_options();
        assert_eq!(options.base_url, "https://pokeapi.co/api/v2/");
        assert_eq!(options.connect_timeout_secs, 10);
        assert_eq!(options.request_timeout_secs, 30);
    }
}
