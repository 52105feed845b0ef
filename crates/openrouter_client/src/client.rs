//! Client for the OpenRouter chat completions API.

use crate::{OpenRouterConfig, OpenRouterError, requests};
use openrouter_core::{ChatMessage, ChatRequest, ChatResponse};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the OpenRouter hosted chat completions API.
///
/// Holds the resolved configuration and a `reqwest` connection pool;
/// cloning is cheap and concurrent calls on one instance are safe since
/// nothing is written after construction.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Creates a new client from a resolved configuration.
    ///
    /// No network traffic occurs until the first call.
    #[instrument(skip(config), fields(model = %config.default_model(), url = %config.base_url()))]
    pub fn new(config: OpenRouterConfig) -> Self {
        let client = Client::new();

        debug!(
            model = %config.default_model(),
            url = %config.base_url(),
            "Created OpenRouter client"
        );

        Self { client, config }
    }

    /// Sends a chat completion request and returns the parsed response.
    ///
    /// This is the delegation boundary: the request goes out verbatim and
    /// the response comes back whole, usage statistics included. [`chat`]
    /// is built on top; call this directly when you need more than the
    /// first choice's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects it, or the
    /// response cannot be parsed.
    ///
    /// [`chat`]: OpenRouterClient::chat
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, OpenRouterError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url().trim_end_matches('/')
        );

        debug!(
            model = %request.model(),
            message_count = request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OpenRouterError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenRouterError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OpenRouterError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(chat_response)
    }

    /// Sends a conversation and returns the first choice's text.
    ///
    /// `model` overrides the configured default for this call only. The
    /// message sequence is not pre-validated; an empty conversation is
    /// passed through for the API to judge.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRouterError::EmptyResponse`] if the response carries
    /// no usable content; network and API failures surface unchanged from
    /// [`send`](OpenRouterClient::send).
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
    ) -> Result<String, OpenRouterError> {
        let model = model.unwrap_or(self.config.default_model().as_str());
        let request = requests::build_chat_request(messages, model)?;
        let response = self.send(&request).await?;
        requests::extract_content(&response)
    }

    /// Wraps a prompt as a single user message and delegates to
    /// [`chat`](OpenRouterClient::chat).
    pub async fn complete(
        &self,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<String, OpenRouterError> {
        self.chat(&[ChatMessage::user(prompt)], model).await
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Returns the model used when a call gives no override.
    pub fn default_model(&self) -> &str {
        self.config.default_model()
    }
}
