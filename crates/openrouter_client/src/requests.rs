//! Request construction and response extraction.
//!
//! These are the pure halves of a chat call: build the exact request the
//! client sends, and pull the answer text back out of the response.

use crate::OpenRouterError;
use openrouter_core::{ChatMessage, ChatRequest, ChatResponse};

/// Builds a chat completion request for the given conversation.
///
/// Message order and role tags are forwarded verbatim; nothing is added,
/// reordered, or dropped.
pub fn build_chat_request(
    messages: &[ChatMessage],
    model: &str,
) -> Result<ChatRequest, OpenRouterError> {
    ChatRequest::builder()
        .model(model)
        .messages(messages.to_vec())
        .build()
        .map_err(|e| OpenRouterError::Builder(format!("Failed to build request: {}", e)))
}

/// Extracts the first choice's text content from a response.
///
/// # Errors
///
/// Returns [`OpenRouterError::EmptyResponse`] when the choice list is
/// empty or the first choice carries no content. The response schema
/// allows a contentless choice (function-call-only responses, provider
/// anomalies), and that case must not leak to the caller as an empty
/// string.
pub fn extract_content(response: &ChatResponse) -> Result<String, OpenRouterError> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or(OpenRouterError::EmptyResponse)
}
