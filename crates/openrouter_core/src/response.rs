//! Chat completion response types.

use crate::Role;
use serde::Deserialize;

/// The message payload of a response choice.
///
/// `content` is optional at the wire level: a provider can return a choice
/// with no text, for example a function-call-only response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Role of the responder, when reported
    #[serde(default)]
    pub role: Option<Role>,
    /// Text content, when present
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in the chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChoiceMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// An OpenAI-format chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices, of which the first is consumed
    pub choices: Vec<ChatChoice>,
    /// Token usage, when the provider reports it
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}
