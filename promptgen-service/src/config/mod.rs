use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Multipart uploads above this size are rejected (10MB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct PromptgenConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub provider: ProviderKind,
    pub gemini: GeminiSettings,
    pub http: HttpSettings,
}

/// Which text provider backs the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Mock,
}

impl std::str::FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "PROMPTGEN_PROVIDER must be 'gemini' or 'mock', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub api_base: String,
    /// Model for text-only prompts.
    pub text_model: String,
    /// Model for prompts carrying an inline image.
    pub vision_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// CORS origins; a single `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    /// Directory holding the browser frontend, served at `/` when set.
    pub static_dir: Option<String>,
    pub rate_limit: RateLimitSettings,
}

/// Per-IP allowance on the AI-backed routes. `requests == 0` disables it.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    pub requests: u32,
    pub window_seconds: u64,
}

impl PromptgenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let provider: ProviderKind = get_env("PROMPTGEN_PROVIDER", Some("gemini"), false)?.parse()?;

        // The mock provider never talks to Google, so the key is optional there.
        let api_key = match provider {
            ProviderKind::Gemini => get_env("GEMINI_API_KEY", None, is_prod)?,
            ProviderKind::Mock => env::var("GEMINI_API_KEY").unwrap_or_default(),
        };

        Ok(PromptgenConfig {
            common: common_config,
            provider,
            gemini: GeminiSettings {
                api_key: Secret::new(api_key),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), false)?,
                text_model: get_env("GEMINI_TEXT_MODEL", Some("gemini-2.0-flash"), false)?,
                vision_model: get_env("GEMINI_VISION_MODEL", Some("gemini-2.0-flash"), false)?,
                timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", 120)?,
            },
            http: HttpSettings {
                allowed_origins: get_env("PROMPTGEN_ALLOWED_ORIGINS", Some("*"), false)?
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
                max_upload_bytes: parse_env("PROMPTGEN_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
                static_dir: env::var("PROMPTGEN_STATIC_DIR")
                    .ok()
                    .filter(|d| !d.is_empty()),
                rate_limit: RateLimitSettings {
                    requests: parse_env("PROMPTGEN_RATE_LIMIT_REQUESTS", 30)?,
                    window_seconds: parse_env("PROMPTGEN_RATE_LIMIT_WINDOW_SECS", 60)?,
                },
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value '{}': {}", key, raw, e))
        }),
        Err(_) => Ok(default),
    }
}
