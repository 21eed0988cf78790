//! Generative model provider abstraction.
//!
//! The chat endpoint and the model reporter both talk to the provider through
//! [`GenerativeProvider`], so the Gemini client can be swapped for the mock in
//! tests.

pub mod gemini;
pub mod mock;

use crate::models::ModelDescriptor;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// The `Display` text is shown to chat users verbatim, so it must never
/// contain credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Error status returned by the provider API.
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response blocked by safety filters")]
    ContentFiltered,

    #[error("The model returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.without_url().to_string())
        } else {
            ProviderError::Network(err.without_url().to_string())
        }
    }
}

/// A hosted text generation service.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate a text reply for a single-turn prompt.
    ///
    /// A successful result is never empty.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// List every model visible to the configured credential.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_and_message() {
        let err = ProviderError::Api {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "400 API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn timeout_displays_bare_word() {
        assert_eq!(ProviderError::Timeout.to_string(), "timeout");
    }
}
