//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The service answered but matched nothing
    #[error("ZERO_RESULTS")]
    ZeroResults,

    /// The service rejected the request (e.g. `REQUEST_DENIED`)
    #[error("Geocoding service returned {status}: {message}")]
    ApiError {
        /// Upstream status code string
        status: String,
        /// Upstream error message, empty if none was sent
        message: String,
    },

    /// Private key is not valid base64url
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Request URL could not be parsed for signing
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Reading the response failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl GeocodingError {
    /// Returns true for the "no match" outcome
    #[must_use]
    pub const fn is_zero_results(&self) -> bool {
        matches!(self, Self::ZeroResults)
    }

    /// Returns true if the client is misconfigured; retrying will not help
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrivateKey(_) | Self::InvalidUrl(_) | Self::ConfigurationError(_)
        )
    }

    /// Returns true if the request never produced a response body
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RequestFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_results_sentinel() {
        let err = GeocodingError::ZeroResults;
        assert!(err.is_zero_results());
        assert!(!err.is_configuration_error());
        assert!(!err.is_transport_error());
        assert_eq!(err.to_string(), "ZERO_RESULTS");
    }

    #[test]
    fn test_configuration_errors() {
        assert!(GeocodingError::InvalidPrivateKey("bad".to_string()).is_configuration_error());
        assert!(GeocodingError::InvalidUrl("bad".to_string()).is_configuration_error());
        assert!(GeocodingError::ConfigurationError("bad".to_string()).is_configuration_error());
        assert!(!GeocodingError::ParseError("bad".to_string()).is_configuration_error());
    }

    #[test]
    fn test_transport_errors() {
        assert!(GeocodingError::ConnectionFailed("refused".to_string()).is_transport_error());
        assert!(GeocodingError::Timeout { timeout_secs: 10 }.is_transport_error());
        assert!(GeocodingError::RequestFailed("eof".to_string()).is_transport_error());
        assert!(!GeocodingError::ZeroResults.is_transport_error());
        assert!(
            !GeocodingError::ApiError {
                status: "REQUEST_DENIED".to_string(),
                message: String::new(),
            }
            .is_transport_error()
        );
    }

    #[test]
    fn test_error_display() {
        let err = GeocodingError::ApiError {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: "You have exceeded your daily request quota".to_string(),
        };
        assert!(err.to_string().contains("OVER_QUERY_LIMIT"));
        assert!(err.to_string().contains("daily request quota"));

        let err = GeocodingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
