//! Wire data types for the OpenRouter chat completions API.
//!
//! This crate provides the request and response types shared across the
//! OpenRouter client crates. OpenRouter speaks the OpenAI chat completions
//! format, so these types serialize to that wire shape exactly.

mod role;
mod message;
mod request;
mod response;

pub use role::Role;
pub use message::ChatMessage;
pub use request::{ChatRequest, ChatRequestBuilder};
pub use response::{ChatChoice, ChatResponse, ChatUsage, ChoiceMessage};
