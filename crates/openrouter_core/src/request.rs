//! Chat completion request types.

use crate::ChatMessage;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;

/// An OpenAI-format chat completion request.
///
/// The optional sampling fields serialize to nothing when unset, so the
/// default request body is exactly `{"model": ..., "messages": [...]}`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}
