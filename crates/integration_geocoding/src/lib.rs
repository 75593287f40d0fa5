//! Geocoding integration
//!
//! Translates addresses to coordinates and back via the
//! [Google Maps geocode JSON API](https://developers.google.com/maps/documentation/geocoding).
//!
//! # Architecture
//!
//! [`GoogleGeocoder`] implements [`GeocodingClient`]. Each operation builds a
//! scheme-agnostic query, finishes it with the configured
//! [`QueryAuthenticator`] (none, API key, or client id plus HMAC-SHA1 URL
//! signature), sends it through an [`HttpTransport`] and interprets the JSON
//! body. A response without results is reported as
//! [`GeocodingError::ZeroResults`] so callers can tell "no match" apart from
//! a failed request.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, GoogleGeocoder};
//!
//! let config = GeocodingConfig::default()
//!     .with_signed_request("gme-acme", "vNIXE0xscrmjlyV-12Nj_BvUPaw=")
//!     .with_channel("web");
//! let client = GoogleGeocoder::new(&config)?;
//!
//! let result = client.geocode("1600 Amphitheatre Parkway").await?;
//! println!("{} -> {}", result.formatted_address, result.location);
//! ```

mod auth;
mod client;
mod config;
mod error;
pub mod query;
mod response;
pub mod signer;
mod transport;

pub use auth::{ApiTokenAuth, QueryAuthenticator, SignedRequestAuth, Unauthenticated};
pub use client::{GeocodingClient, GoogleGeocoder};
pub use config::{AuthConfig, GeocodingConfig};
pub use error::GeocodingError;
pub use response::{parse_geocode, parse_reverse_geocode};
pub use transport::{HttpTransport, ReqwestTransport};
