//! Central configuration constants for the recipe backend connection.

/// Base URL of the recipe API when no override is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV: &str = "LARDER_API_URL";

/// TCP connect timeout for backend requests, in seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Overall request timeout for backend requests, in seconds.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolve the API base URL from the environment, falling back to the
/// default. Blank overrides are ignored.
pub fn api_base_url() -> String {
    std::env::var(API_BASE_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
