//! Client for the OpenRouter chat completions API.
//!
//! OpenRouter fronts many hosted models behind a single OpenAI-compatible
//! endpoint. This crate resolves a configuration once at construction,
//! forwards conversations verbatim, and returns the first choice's text.
//!
//! ```no_run
//! use openrouter_client::{OpenRouterClient, OpenRouterConfig};
//!
//! # async fn run() -> Result<(), openrouter_client::OpenRouterError> {
//! let client = OpenRouterClient::new(OpenRouterConfig::new("sk-or-..."));
//! let answer = client.complete("Say hello!", None).await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
//!
//! Retry, batching, and conversation management are caller concerns; the
//! client holds no state between calls beyond the immutable configuration.

mod client;
mod config;
mod error;
pub mod requests;

pub use client::OpenRouterClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenRouterConfig, OpenRouterConfigBuilder};
pub use error::OpenRouterError;

pub use openrouter_core::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage,
    ChoiceMessage, Role,
};
