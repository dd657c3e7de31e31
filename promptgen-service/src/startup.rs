//! Application startup and lifecycle management.

use crate::config::{PromptgenConfig, ProviderKind};
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::TextProvider;
use crate::services::{Generator, PreferenceStore};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    rate_limit::{create_ip_rate_limiter, ip_rate_limit_middleware},
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, RequestId},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: PromptgenConfig,
    pub generator: Generator,
    pub preferences: PreferenceStore,
}

impl AppState {
    pub fn new(config: PromptgenConfig, provider: Arc<dyn TextProvider>) -> Self {
        Self {
            config,
            generator: Generator::new(provider),
            preferences: PreferenceStore::seeded(),
        }
    }
}

/// Pick the text provider named in the configuration.
pub fn build_provider(config: &PromptgenConfig) -> Result<Arc<dyn TextProvider>, AppError> {
    let provider: Arc<dyn TextProvider> = match config.provider {
        ProviderKind::Gemini => {
            let gemini = GeminiTextProvider::new(GeminiConfig {
                api_key: config.gemini.api_key.clone(),
                api_base: config.gemini.api_base.clone(),
                text_model: config.gemini.text_model.clone(),
                vision_model: config.gemini.vision_model.clone(),
                timeout: Duration::from_secs(config.gemini.timeout_secs),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

            tracing::info!(
                text_model = %config.gemini.text_model,
                vision_model = %config.gemini.vision_model,
                "Initialized Gemini text provider"
            );
            Arc::new(gemini)
        }
        ProviderKind::Mock => {
            tracing::warn!("Using mock text provider; responses are canned");
            Arc::new(MockTextProvider::new(true))
        }
    };

    Ok(provider)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ]);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Build the full router with every middleware layer.
pub fn build_router(state: AppState) -> Router {
    let http = state.config.http.clone();

    // Routes that spend provider quota.
    let mut ai_routes = Router::new()
        .route(
            "/generate_target_audience",
            post(handlers::copywriting::generate_target_audience),
        )
        .route(
            "/generate_main_message",
            post(handlers::copywriting::generate_main_message),
        )
        .route(
            "/generate_character_from_photo",
            post(handlers::character::generate_character_from_photo),
        )
        .route("/generate_prompt", post(handlers::video_prompt::generate_prompt));

    if http.rate_limit.requests > 0 {
        let limiter =
            create_ip_rate_limiter(http.rate_limit.requests, http.rate_limit.window_seconds);
        ai_routes = ai_routes.route_layer(from_fn_with_state(limiter, ip_rate_limit_middleware));
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics))
        .route(
            "/save_character_preference",
            post(handlers::preference::save_character_preference),
        )
        .route(
            "/get_character_preference",
            get(handlers::preference::get_character_preference),
        )
        .route(
            "/get_external_prompt",
            post(handlers::external::get_external_prompt),
        )
        .merge(ai_routes);

    router = match &http.static_dir {
        Some(dir) => {
            tracing::info!(static_dir = %dir, "Serving frontend");
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => router.route("/", get(handlers::health::index)),
    };

    router
        .layer(DefaultBodyLimit::max(http.max_upload_bytes))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(|id| id.0.as_str())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri().path(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors_layer(&http.allowed_origins))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: PromptgenConfig) -> Result<Self, AppError> {
        let provider = build_provider(&config)?;
        let state = AppState::new(config.clone(), provider);
        let router = build_router(state);

        // Port 0 binds a random port (used by tests).
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Promptgen service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}
