//! Geocode JSON response interpretation

use domain::{GeoPoint, GeocodeResult};
use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodingError;

/// Upstream status values that do not signal a failure
const NON_ERROR_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

/// Raw geocode API response
#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Vec<RawResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: RawLocation,
}

/// The service sends `lat`/`lng`; older fixtures use `Lat`/`Lng`
#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(alias = "Lat")]
    lat: f64,
    #[serde(alias = "Lng")]
    lng: f64,
}

impl RawResponse {
    fn parse(body: &[u8]) -> Result<Self, GeocodingError> {
        serde_json::from_slice(body).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    /// First result, or the error explaining why there is none
    fn into_first(self) -> Result<RawResult, GeocodingError> {
        let Self {
            results,
            status,
            error_message,
        } = self;

        if let Some(first) = results.into_iter().next() {
            return Ok(first);
        }

        match status {
            Some(status) if !NON_ERROR_STATUSES.contains(&status.as_str()) => {
                Err(GeocodingError::ApiError {
                    status,
                    message: error_message.unwrap_or_default(),
                })
            },
            _ => Err(GeocodingError::ZeroResults),
        }
    }
}

/// Interpret a forward geocode response body
///
/// An empty result list is [`GeocodingError::ZeroResults`] unless the body
/// carries a failure `status` such as `REQUEST_DENIED`. That case is reported
/// as [`GeocodingError::ApiError`] instead, so a rejected request is not
/// mistaken for a query with no match. Clients that only look at the result
/// list would report both as zero results.
///
/// # Errors
///
/// Returns [`GeocodingError::ParseError`] for malformed JSON or a result
/// without a location, [`GeocodingError::ZeroResults`] for an empty result
/// list and [`GeocodingError::ApiError`] if the service reported a failure.
pub fn parse_geocode(body: &[u8]) -> Result<GeocodeResult, GeocodingError> {
    let first = RawResponse::parse(body)?.into_first()?;

    let location = first
        .geometry
        .map(|g| g.location)
        .ok_or_else(|| GeocodingError::ParseError("result has no geometry".to_string()))?;

    debug!(lat = location.lat, lng = location.lng, "Parsed geocode result");

    Ok(GeocodeResult::new(
        first.formatted_address,
        GeoPoint::new(location.lat, location.lng),
    ))
}

/// Interpret a reverse geocode response body
///
/// # Errors
///
/// Same as [`parse_geocode`], except that results need no geometry.
pub fn parse_reverse_geocode(body: &[u8]) -> Result<String, GeocodingError> {
    let first = RawResponse::parse(body)?.into_first()?;
    Ok(first.formatted_address)
}
