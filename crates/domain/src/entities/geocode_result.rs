//! Result of a forward geocode lookup

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// The best match returned for an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Canonical address as formatted by the geocoding service
    pub formatted_address: String,
    /// Coordinates of the match
    pub location: GeoPoint,
}

impl GeocodeResult {
    /// Create a new geocode result
    pub fn new(formatted_address: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            location,
        }
    }
}
