use promptgen_service::config::{
    GeminiSettings, HttpSettings, PromptgenConfig, ProviderKind, RateLimitSettings,
};
use promptgen_service::services::metrics::init_metrics;
use promptgen_service::startup::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEXT_MODEL: &str = "gemini-test-text";
pub const VISION_MODEL: &str = "gemini-test-vision";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
    pub gemini: MockServer,
}

/// Base configuration: Gemini provider pointed at the mock server, rate
/// limiting off.
pub fn test_config(gemini_uri: &str) -> PromptgenConfig {
    PromptgenConfig {
        common: Config {
            port: 0, // Random port
            ..Config::default()
        },
        provider: ProviderKind::Gemini,
        gemini: GeminiSettings {
            api_key: Secret::new("test-api-key".to_string()),
            api_base: gemini_uri.to_string(),
            text_model: TEXT_MODEL.to_string(),
            vision_model: VISION_MODEL.to_string(),
            timeout_secs: 5,
        },
        http: HttpSettings {
            allowed_origins: vec!["*".to_string()],
            max_upload_bytes: 1024 * 1024,
            static_dir: None,
            rate_limit: RateLimitSettings {
                requests: 0,
                window_seconds: 60,
            },
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(customize: impl FnOnce(&mut PromptgenConfig)) -> Self {
        init_metrics();

        let gemini = MockServer::start().await;
        let mut config = test_config(&gemini.uri());
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
            gemini,
        }
    }

    pub async fn post_json(&self, route: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, route))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, route: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, route))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Answer `generateContent` calls on `model` whose body contains `needle`.
    pub async fn mock_generate(&self, model: &str, needle: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", model)))
            .and(body_string_contains(needle))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(text)))
            .mount(&self.gemini)
            .await;
    }

    /// Fail every `generateContent` call with the given status.
    pub async fn mock_generate_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"code": status, "message": "upstream exploded", "status": "INTERNAL"}
            })))
            .mount(&self.gemini)
            .await;
    }
}

/// A minimal successful `generateContent` response.
pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 7, "totalTokenCount": 19}
    })
}
