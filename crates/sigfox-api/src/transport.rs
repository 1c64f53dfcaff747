// Transport configuration for building the shared reqwest::Client.
//
// One client (and therefore one connection pool) per `SigfoxClient`.
// The pool is released when the owning client is dropped.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Error;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.sigfox.com/v2";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("sigfox-rs/", env!("CARGO_PKG_VERSION"));

/// Settings applied to every request made through a client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. A timed-out request surfaces as `Error::Network`.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Config with the given timeout and the default user agent.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Build a `reqwest::Client` that sends JSON `Accept`/`Content-Type`
    /// headers on every request.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Client(e.to_string()))
    }
}
