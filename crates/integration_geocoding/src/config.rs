//! Geocoding client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::GeocodingError;
use crate::signer;

/// Configuration for the geocoding client
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    /// Geocode JSON endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Authentication scheme and its credentials
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("geocoder/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Authentication scheme, selected once per client
///
/// Configured as an inline table tagged by `scheme`:
/// `{ scheme = "api_token", api_key = "..." }`
#[derive(Clone, Default, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No credentials are sent
    #[default]
    Unauthenticated,

    /// API key appended as `key=`
    ApiToken {
        /// API key (sensitive - uses SecretString)
        api_key: SecretString,
    },

    /// Premium-plan client id with an HMAC-SHA1 URL signature
    SignedRequest {
        /// Client identifier, sent as `client=`
        client_id: String,
        /// base64url-encoded signing key (sensitive - uses SecretString)
        private_key: SecretString,
        /// Optional usage-reporting channel, sent as `channel=`
        #[serde(default)]
        channel: Option<String>,
    },
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("Unauthenticated"),
            Self::ApiToken { .. } => f
                .debug_struct("ApiToken")
                .field("api_key", &"[REDACTED]")
                .finish(),
            Self::SignedRequest {
                client_id, channel, ..
            } => f
                .debug_struct("SignedRequest")
                .field("client_id", client_id)
                .field("private_key", &"[REDACTED]")
                .field("channel", channel)
                .finish(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            auth: AuthConfig::default(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Use a different geocode endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Authenticate with an API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth = AuthConfig::ApiToken {
            api_key: SecretString::from(api_key.into()),
        };
        self
    }

    /// Authenticate with a client id and signed URLs
    #[must_use]
    pub fn with_signed_request(
        mut self,
        client_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        self.auth = AuthConfig::SignedRequest {
            client_id: client_id.into(),
            private_key: SecretString::from(private_key.into()),
            channel: None,
        };
        self
    }

    /// Set the reporting channel; ignored unless signed requests are configured
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        if let AuthConfig::SignedRequest {
            channel: current, ..
        } = &mut self.auth
        {
            *current = Some(channel.into());
        }
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::ConfigurationError`] for missing or malformed
    /// settings and [`GeocodingError::InvalidPrivateKey`] if the signing key
    /// is not valid base64url.
    pub fn validate(&self) -> Result<(), GeocodingError> {
        if self.base_url.is_empty() {
            return Err(GeocodingError::ConfigurationError(
                "base_url must not be empty".to_string(),
            ));
        }

        Url::parse(&self.base_url).map_err(|e| {
            GeocodingError::ConfigurationError(format!("base_url is not an absolute URL: {e}"))
        })?;

        if self.timeout_secs == 0 {
            return Err(GeocodingError::ConfigurationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        match &self.auth {
            AuthConfig::Unauthenticated => {},
            AuthConfig::ApiToken { api_key } => {
                if api_key.expose_secret().is_empty() {
                    return Err(GeocodingError::ConfigurationError(
                        "api_key must not be empty".to_string(),
                    ));
                }
            },
            AuthConfig::SignedRequest {
                client_id,
                private_key,
                ..
            } => {
                if client_id.is_empty() {
                    return Err(GeocodingError::ConfigurationError(
                        "client_id must not be empty".to_string(),
                    ));
                }
                signer::decode_private_key(private_key.expose_secret())?;
            },
        }

        Ok(())
    }
}
