//! Error types for the OpenRouter client.

/// Errors from the OpenRouter chat completions API.
#[derive(Debug, Clone, derive_more::Display)]
pub enum OpenRouterError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// The response carried no usable content
    #[display("No content in response")]
    EmptyResponse,

    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl std::error::Error for OpenRouterError {}
