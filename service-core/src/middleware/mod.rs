//! Tower/axum middleware shared by the HTTP services.

pub mod metrics;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;
