use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for the chat-completions question source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub base_url: String,
    /// `None` keeps the app usable; generation then fails with `NotConfigured`.
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl GenerationConfig {
    /// Read `QUIZ_AI_API_KEY`, `QUIZ_AI_BASE_URL` and `QUIZ_AI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `QUIZ_AI_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("QUIZ_AI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let model = env::var("QUIZ_AI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        let mut config = Self {
            api_key,
            model,
            ..Self::default()
        };
        match env::var("QUIZ_AI_BASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => config.set_base_url(&raw)?,
            _ => {}
        }
        Ok(config)
    }

    /// Point the source at another OpenAI-compatible server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` unless `raw` is an http(s) URL.
    pub fn set_base_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        parse_http_url("QUIZ_AI_BASE_URL", raw)?;
        self.base_url = raw.trim().to_string();
        Ok(())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Destination for best-effort result logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: Url,
}

impl WebhookConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` unless `raw` is an http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            url: parse_http_url("QUIZ_RESULTS_WEBHOOK_URL", raw)?,
        })
    }

    /// Read `QUIZ_RESULTS_WEBHOOK_URL`; unset or blank disables result logging.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set to something other than an http(s) URL.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match env::var("QUIZ_RESULTS_WEBHOOK_URL") {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(&raw).map(Some),
            _ => Ok(None),
        }
    }
}

fn parse_http_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme { name }),
    }
}
