//! AI provider abstractions and implementations.
//!
//! Handlers talk to a [`TextProvider`] so the Gemini backend can be swapped
//! for the deterministic mock in tests and offline runs.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Text of the first part of the first candidate.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// An image sent inline with the prompt.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Response schema. When set the model is asked for `application/json`.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationParams {
    pub fn structured(schema: serde_json::Value) -> Self {
        Self {
            response_schema: Some(schema),
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response, optionally grounded on inline images.
    async fn generate(
        &self,
        prompt: &str,
        images: &[InlineImage],
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Provider name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
