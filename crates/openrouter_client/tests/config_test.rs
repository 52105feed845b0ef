//! Tests for configuration resolution.

use openrouter_client::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, OpenRouterClient, OpenRouterConfig,
};

#[test]
fn test_defaults_applied_with_key_only() {
    let config = OpenRouterConfig::new("test-api-key");

    assert_eq!(config.api_key(), "test-api-key");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.default_model(), DEFAULT_MODEL);
}

#[test]
fn test_builder_defaults_match_new() {
    let built = OpenRouterConfig::builder()
        .api_key("test-api-key")
        .build()
        .expect("Valid config");

    assert_eq!(built, OpenRouterConfig::new("test-api-key"));
}

#[test]
fn test_builder_overrides() {
    let config = OpenRouterConfig::builder()
        .api_key("test-api-key")
        .base_url("https://example.com/api/v1")
        .default_model("anthropic/claude-3-opus")
        .build()
        .expect("Valid config");

    assert_eq!(config.base_url(), "https://example.com/api/v1");
    assert_eq!(config.default_model(), "anthropic/claude-3-opus");
}

#[test]
fn test_builder_requires_api_key() {
    let result = OpenRouterConfig::builder().build();
    assert!(result.is_err());
}

#[test]
fn test_client_exposes_resolved_config() {
    let config = OpenRouterConfig::builder()
        .api_key("test-api-key")
        .default_model("mistralai/mistral-7b-instruct")
        .build()
        .expect("Valid config");

    let client = OpenRouterClient::new(config);

    assert_eq!(client.default_model(), "mistralai/mistral-7b-instruct");
    assert_eq!(client.config().base_url(), DEFAULT_BASE_URL);
}
