use std::env;
use std::time::Duration;

use dotenvy::dotenv;

/// Static configuration of the API client. Nothing here mutates after
/// startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            base_url: env::var("HR_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            connect_timeout: Duration::from_millis(
                env::var("HR_API_CONNECT_TIMEOUT_MS")
                    .unwrap_or_else(|_| "15000".to_string())
                    .parse()
                    .unwrap_or(15_000),
            ),
            request_timeout: Duration::from_millis(
                env::var("HR_API_REQUEST_TIMEOUT_MS")
                    .unwrap_or_else(|_| "30000".to_string())
                    .parse()
                    .unwrap_or(30_000),
            ),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::from_env()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
