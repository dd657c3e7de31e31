//! Mock provider implementation for tests and offline runs.

use super::{
    FinishReason, GenerationParams, InlineImage, ProviderError, ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Deterministic text provider.
///
/// Echoes the prompt back. When a response schema is requested it returns a
/// JSON object with one string per schema property instead.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn structured_body(schema: &Value) -> String {
        let mut object = Map::new();
        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for key in properties.keys() {
                object.insert(key.clone(), Value::String(format!("Mock {}", key)));
            }
        }
        Value::Object(object).to_string()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        images: &[InlineImage],
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        let text = match &params.response_schema {
            Some(schema) => Self::structured_body(schema),
            None if images.is_empty() => format!("Mock response for: {}", prompt),
            None => format!(
                "Mock description of {} image(s) for: {}",
                images.len(),
                prompt
            ),
        };

        Ok(ProviderResponse {
            output_tokens: text.len() as i32 / 4,
            input_tokens: prompt.len() as i32 / 4,
            text,
            finish_reason: FinishReason::Complete,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
