use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr};

/// Connection settings for the booking backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` prefix.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Loads settings from the environment:
    ///
    /// - `SLOTBOOK_API_URL` (default `http://localhost:3000`)
    /// - `SLOTBOOK_REQUEST_TIMEOUT_SECONDS` (default 10)
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("SLOTBOOK_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let request_timeout = env::var("SLOTBOOK_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .wrap_err("Invalid SLOTBOOK_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}
