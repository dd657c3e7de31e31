//! Thin orchestration over a [`TextProvider`]: timing, metrics, logging and
//! the two-language fan-out every endpoint needs.

use super::metrics;
use super::providers::{
    FinishReason, GenerationParams, InlineImage, ProviderError, ProviderResponse, TextProvider,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

/// A pair of generated texts, one per output language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bilingual {
    pub id: String,
    pub en: String,
}

#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn TextProvider>,
}

impl Generator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    async fn call(
        &self,
        operation: &'static str,
        prompt: &str,
        images: &[InlineImage],
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let start = Instant::now();
        let result = self.provider.generate(prompt, images, params).await;
        let latency = start.elapsed();
        let provider = self.provider.name();

        match &result {
            Ok(response) => {
                metrics::record_provider_call(provider, operation, "ok", latency);
                metrics::record_tokens(provider, response.input_tokens, response.output_tokens);
                if response.finish_reason == FinishReason::Length {
                    tracing::warn!(provider, operation, "Provider output hit the token limit");
                }
                tracing::debug!(
                    provider,
                    operation,
                    latency_ms = latency.as_millis() as u64,
                    output_len = response.text.len(),
                    "Provider call succeeded"
                );
            }
            Err(e) => {
                metrics::record_provider_call(provider, operation, e.kind(), latency);
                tracing::warn!(provider, operation, error = %e, "Provider call failed");
            }
        }

        result
    }

    /// Run the Indonesian and English prompts concurrently. Either failure
    /// fails the pair.
    pub async fn bilingual(
        &self,
        operation: &'static str,
        prompt_id: &str,
        prompt_en: &str,
        images: &[InlineImage],
    ) -> Result<Bilingual, ProviderError> {
        let params = GenerationParams::default();
        let (id, en) = tokio::try_join!(
            self.call(operation, prompt_id, images, &params),
            self.call(operation, prompt_en, images, &params),
        )?;

        Ok(Bilingual {
            id: id.text,
            en: en.text,
        })
    }

    /// Ask for JSON matching `schema` and decode it into `T`.
    pub async fn structured<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        prompt: &str,
        schema: serde_json::Value,
    ) -> Result<T, ProviderError> {
        let params = GenerationParams::structured(schema);
        let response = self.call(operation, prompt, &[], &params).await?;

        serde_json::from_str(response.text.trim()).map_err(|e| {
            tracing::warn!(operation, error = %e, "Provider returned invalid JSON");
            let reason = match response.finish_reason {
                FinishReason::Length => "model output truncated at the token limit",
                _ => "invalid JSON from model",
            };
            ProviderError::MalformedResponse(format!("{}: {}", reason, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;
    use serde::Deserialize;
    use serde_json::json;

    fn generator() -> Generator {
        Generator::new(Arc::new(MockTextProvider::new(true)))
    }

    #[tokio::test]
    async fn bilingual_keeps_language_order() {
        let pair = generator()
            .bilingual("test", "halo", "hello", &[])
            .await
            .unwrap();
        assert_eq!(pair.id, "Mock response for: halo");
        assert_eq!(pair.en, "Mock response for: hello");
    }

    #[tokio::test]
    async fn structured_decodes_schema_object() {
        #[derive(Deserialize)]
        struct Out {
            a: String,
        }

        let schema = json!({"type": "OBJECT", "properties": {"a": {"type": "STRING"}}});
        let out: Out = generator().structured("test", "p", schema).await.unwrap();
        assert_eq!(out.a, "Mock a");
    }

    #[tokio::test]
    async fn structured_rejects_mismatched_shape() {
        #[derive(Debug, Deserialize)]
        struct Out {
            #[allow(dead_code)]
            a: String,
        }

        // No "properties" means the mock answers with an empty object.
        let err = generator()
            .structured::<Out>("test", "p", json!({"type": "OBJECT"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    struct TruncatingProvider;

    #[async_trait::async_trait]
    impl TextProvider for TruncatingProvider {
        async fn generate(
            &self,
            _prompt: &str,
            _images: &[InlineImage],
            _params: &GenerationParams,
        ) -> Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse {
                text: r#"{"a": "cut of"#.to_string(),
                input_tokens: 10,
                output_tokens: 8192,
                finish_reason: FinishReason::Length,
            })
        }

        fn name(&self) -> &'static str {
            "truncating"
        }

        async fn health_check(&self) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn truncated_json_names_the_token_limit() {
        #[derive(Debug, Deserialize)]
        struct Out {
            #[allow(dead_code)]
            a: String,
        }

        let generator = Generator::new(Arc::new(TruncatingProvider));
        let err = generator
            .structured::<Out>("test", "p", json!({"type": "OBJECT"}))
            .await
            .unwrap_err();

        match err {
            ProviderError::MalformedResponse(msg) => assert!(msg.contains("token limit"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn disabled_provider_fails_the_pair() {
        let generator = Generator::new(Arc::new(MockTextProvider::new(false)));
        assert!(generator.bilingual("test", "a", "b", &[]).await.is_err());
    }
}
