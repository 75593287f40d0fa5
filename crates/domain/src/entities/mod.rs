//! Entities produced by geocoding lookups

mod geocode_result;

pub use geocode_result::GeocodeResult;
