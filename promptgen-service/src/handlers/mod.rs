//! HTTP handlers for promptgen-service.

pub mod character;
pub mod copywriting;
pub mod external;
pub mod health;
pub mod preference;
pub mod video_prompt;

use service_core::error::AppError;

/// Trimmed value of a required text field, or a 400 with `message`.
pub(crate) fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::bad_request(message)),
    }
}

/// Optional text field; blank counts as absent.
pub(crate) fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
