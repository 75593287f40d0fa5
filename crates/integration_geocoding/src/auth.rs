//! Request authentication schemes
//!
//! Each scheme finishes a base query (`sensor=false&...`) into the query
//! that is actually sent. Schemes never combine: a client holds exactly one
//! [`QueryAuthenticator`], built from its [`AuthConfig`].

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::GeocodingError;
use crate::signer;

/// Finishes a query string for one authentication scheme
///
/// Implementations hold only immutable credentials, so one instance can be
/// shared by concurrent requests.
pub trait QueryAuthenticator: Send + Sync {
    /// Scheme name, safe to log
    fn scheme(&self) -> &'static str;

    /// Append this scheme's parameters to `query`
    ///
    /// `endpoint` is the URL the query will be appended to after `?`.
    fn authenticate(&self, endpoint: &str, query: String) -> Result<String, GeocodingError>;
}

/// Sends the query unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Unauthenticated;

impl QueryAuthenticator for Unauthenticated {
    fn scheme(&self) -> &'static str {
        "unauthenticated"
    }

    fn authenticate(&self, _endpoint: &str, query: String) -> Result<String, GeocodingError> {
        Ok(query)
    }
}

/// Appends `&key=<api key>`
pub struct ApiTokenAuth {
    api_key: SecretString,
}

impl ApiTokenAuth {
    /// Create a new API token authenticator
    pub const fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl std::fmt::Debug for ApiTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenAuth")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl QueryAuthenticator for ApiTokenAuth {
    fn scheme(&self) -> &'static str {
        "api_token"
    }

    fn authenticate(&self, _endpoint: &str, mut query: String) -> Result<String, GeocodingError> {
        query.push_str("&key=");
        query.push_str(self.api_key.expose_secret());
        Ok(query)
    }
}

/// Appends `&channel=` (if set), `&client=` and an HMAC-SHA1 `&signature=`
pub struct SignedRequestAuth {
    client_id: String,
    private_key: SecretString,
    channel: Option<String>,
}

impl SignedRequestAuth {
    /// Create a new signed-request authenticator
    ///
    /// An empty channel is treated as no channel.
    pub fn new(client_id: String, private_key: SecretString, channel: Option<String>) -> Self {
        Self {
            client_id,
            private_key,
            channel: channel.filter(|c| !c.is_empty()),
        }
    }
}

impl std::fmt::Debug for SignedRequestAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequestAuth")
            .field("client_id", &self.client_id)
            .field("private_key", &"[REDACTED]")
            .field("channel", &self.channel)
            .finish()
    }
}

impl QueryAuthenticator for SignedRequestAuth {
    fn scheme(&self) -> &'static str {
        "signed_request"
    }

    fn authenticate(&self, endpoint: &str, mut query: String) -> Result<String, GeocodingError> {
        if let Some(channel) = &self.channel {
            query.push_str("&channel=");
            query.push_str(channel);
        }
        query.push_str("&client=");
        query.push_str(&self.client_id);

        let signature =
            signer::sign_url(&format!("{endpoint}?{query}"), self.private_key.expose_secret())?;
        debug!(client_id = %self.client_id, "Signed geocoding request");

        query.push_str("&signature=");
        query.push_str(&signature);
        Ok(query)
    }
}

impl AuthConfig {
    /// Build the authenticator for this scheme
    pub fn authenticator(&self) -> Arc<dyn QueryAuthenticator> {
        match self {
            Self::Unauthenticated => Arc::new(Unauthenticated),
            Self::ApiToken { api_key } => Arc::new(ApiTokenAuth::new(api_key.clone())),
            Self::SignedRequest {
                client_id,
                private_key,
                channel,
            } => Arc::new(SignedRequestAuth::new(
                client_id.clone(),
                private_key.clone(),
                channel.clone(),
            )),
        }
    }
}
