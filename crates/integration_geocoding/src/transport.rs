//! HTTP transport for geocoding requests

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;

/// Sends a GET request and returns the raw response body
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` and return its body
    ///
    /// The HTTP status is not inspected; any response body is returned.
    async fn get(&self, url: &str) -> Result<Bytes, GeocodingError>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with the configured timeout and user agent
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Bytes, GeocodingError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                GeocodingError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "Geocoding response received");
        } else {
            warn!(%status, "Geocoding service returned non-success status; parsing body anyway");
        }

        response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                GeocodingError::RequestFailed(e.to_string())
            }
        })
    }
}
