//! Gemini AI provider implementation.
//!
//! Implements text and image-grounded generation using Google's Gemini
//! `generateContent` REST method.

use super::{
    FinishReason, GenerationParams, InlineImage, ProviderError, ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    /// Base URL up to and including the API version, e.g. `.../v1beta`.
    pub api_base: String,
    pub text_model: String,
    pub vision_model: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model and method. The key travels as
    /// a query parameter added at send time so it never reaches the logs.
    fn api_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            model,
            method
        )
    }

    fn model_for(&self, images: &[InlineImage]) -> &str {
        if images.is_empty() {
            &self.config.text_model
        } else {
            &self.config.vision_model
        }
    }

    fn build_request(
        prompt: &str,
        images: &[InlineImage],
        params: &GenerationParams,
    ) -> GenerateContentRequest {
        let mut parts = vec![ContentPart::Text {
            text: prompt.to_string(),
        }];
        parts.extend(images.iter().map(|image| ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        }));

        let generation_config = params
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            });

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config,
        }
    }
}

/// Pull the text, token usage and finish reason out of a decoded response.
fn parse_response(api_response: GenerateContentResponse) -> Result<ProviderResponse, ProviderError> {
    let candidate = api_response
        .candidates
        .first()
        .ok_or_else(|| ProviderError::MalformedResponse("response has no candidates".into()))?;

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Complete,
    };

    if finish_reason == FinishReason::ContentFilter {
        return Err(ProviderError::ContentFiltered);
    }

    let text = candidate
        .content
        .as_ref()
        .and_then(|c| c.parts.first())
        .and_then(|p| match p {
            ContentPart::Text { text } => Some(text.clone()),
            _ => None,
        })
        .ok_or_else(|| {
            ProviderError::MalformedResponse("first candidate carries no text part".into())
        })?;

    let usage = api_response.usage_metadata.unwrap_or_default();

    Ok(ProviderResponse {
        text,
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0),
        finish_reason,
    })
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        images: &[InlineImage],
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = Self::build_request(prompt, images, params);
        let model = self.model_for(images);
        let url = self.api_url(model, "generateContent");

        tracing::debug!(
            model = %model,
            prompt_len = prompt.len(),
            image_count = images.len(),
            structured = params.response_schema.is_some(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.without_url().to_string()))?;

        parse_response(api_response)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        // Fetching the model resource verifies both the key and the model name.
        let url = format!(
            "{}/models/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.text_model
        );

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineData,
    },
    /// Part kinds this service never sends (function calls, thoughts, ...).
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}
