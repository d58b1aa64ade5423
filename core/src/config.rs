//! Client configuration: base URL resolution, default headers, timeout.

use std::env;
use std::time::Duration;

/// Primary environment variable for the backend base URL.
pub const ENV_BASE_URL: &str = "LMS_API_URL";
/// Fallback environment variable checked when the primary is unset.
pub const ENV_BASE_URL_FALLBACK: &str = "API_URL";
/// Hardcoded default used when neither variable is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

/// Content type attached to every request built by the client.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Fixed request timeout. The core only carries the value; enforcing it is
/// the transport's job.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for an `ApiClient`, resolved once at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub content_type: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolve the base URL from `LMS_API_URL`, then `API_URL`, then the
    /// hardcoded default.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL)
            .or_else(|_| env::var(ENV_BASE_URL_FALLBACK))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
