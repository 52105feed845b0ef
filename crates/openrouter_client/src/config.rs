//! Client configuration with OpenRouter defaults.

use derive_builder::Builder;
use derive_getters::Getters;

/// Default OpenRouter API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used when neither the configuration nor the call site names one.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Resolved configuration for an [`OpenRouterClient`](crate::OpenRouterClient).
///
/// Defaults are applied once, at construction; the configuration is
/// immutable afterwards. The key is not validated here: a bad key
/// surfaces as an API error on the first call.
///
/// # Examples
///
/// ```
/// use openrouter_client::{OpenRouterConfig, DEFAULT_MODEL};
///
/// let config = OpenRouterConfig::new("sk-or-...");
/// assert_eq!(config.default_model(), DEFAULT_MODEL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Builder)]
#[builder(setter(into))]
pub struct OpenRouterConfig {
    /// API key for bearer authentication
    api_key: String,
    /// Base URL of the API endpoint
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model used when a call gives no override
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    default_model: String,
}

impl OpenRouterConfig {
    /// Creates a configuration with the given key and defaults applied.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Creates a new builder for OpenRouterConfig.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }
}
