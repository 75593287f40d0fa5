//! Geocoding client
//!
//! Composes query construction, the configured authentication scheme, the
//! transport and response interpretation into the two public operations.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use domain::{GeoPoint, GeocodeResult};
use tracing::{debug, instrument};

use crate::auth::QueryAuthenticator;
use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::query;
use crate::response;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to its best-matching location
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodingError>;

    /// Convert a point to the formatted address of its best match
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, GeocodingError>;
}

/// Client for the Google Maps geocode JSON API
///
/// Credentials are fixed at construction. The client holds no per-request
/// state and can be shared across tasks behind an `Arc`.
pub struct GoogleGeocoder {
    base_url: String,
    authenticator: Arc<dyn QueryAuthenticator>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for GoogleGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocoder")
            .field("base_url", &self.base_url)
            .field("auth_scheme", &self.authenticator.scheme())
            .finish_non_exhaustive()
    }
}

impl GoogleGeocoder {
    /// Create a new client using a `reqwest` transport
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a new client over a caller-supplied transport
    pub fn with_transport(config: &GeocodingConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            authenticator: config.auth.authenticator(),
            transport,
        }
    }

    /// Name of the configured authentication scheme
    pub fn auth_scheme(&self) -> &'static str {
        self.authenticator.scheme()
    }

    /// Finish operation parameters into the query that is sent
    ///
    /// Prepends `sensor=false` and applies the authentication scheme.
    ///
    /// # Errors
    ///
    /// Fails for signed requests with an invalid private key or base URL.
    pub fn authenticated_query(&self, params: &str) -> Result<String, GeocodingError> {
        self.authenticator
            .authenticate(&self.base_url, query::with_sensor(params))
    }

    /// Full request URL for operation parameters, without sending it
    ///
    /// # Errors
    ///
    /// Same as [`Self::authenticated_query`].
    pub fn request_url(&self, params: &str) -> Result<String, GeocodingError> {
        Ok(format!("{}?{}", self.base_url, self.authenticated_query(params)?))
    }

    /// Issue a raw GET for `query` against the base URL
    ///
    /// No parameters are added: the caller is responsible for `sensor` and
    /// any credentials.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request does not complete.
    pub async fn request(&self, query: &str) -> Result<Bytes, GeocodingError> {
        self.transport
            .get(&format!("{}?{}", self.base_url, query))
            .await
    }

    async fn fetch(&self, params: &str) -> Result<Bytes, GeocodingError> {
        let query = self.authenticated_query(params)?;
        debug!(scheme = self.auth_scheme(), "Sending geocoding request");
        self.request(&query).await
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodingError> {
        let body = self.fetch(&query::geocode_query(address)).await?;
        let result = response::parse_geocode(&body)?;
        debug!(%address, location = %result.location, "Geocoded address");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<String, GeocodingError> {
        let body = self.fetch(&query::reverse_geocode_query(point)).await?;
        let address = response::parse_reverse_geocode(&body)?;
        debug!(%point, %address, "Reverse geocoded point");
        Ok(address)
    }
}
