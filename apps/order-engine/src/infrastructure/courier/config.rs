//! Courier adapter configuration.

use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the BD Courier delivery-history aggregator.
#[derive(Debug, Clone)]
pub struct BdCourierConfig {
    /// API base URL.
    pub base_url: String,
    /// Bearer token.
    pub api_token: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl BdCourierConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: String, api_token: String) -> Self {
        Self {
            base_url,
            api_token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for the Steadfast fraud-flag API.
#[derive(Debug, Clone)]
pub struct SteadfastConfig {
    /// API base URL.
    pub base_url: String,
    /// API key header value.
    pub api_key: String,
    /// Secret key header value.
    pub secret_key: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl SteadfastConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: String, api_key: String, secret_key: String) -> Self {
        Self {
            base_url,
            api_key,
            secret_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
