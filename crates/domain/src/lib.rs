//! Domain layer for the geocoder
//!
//! Contains the geographic value objects and lookup results shared by the
//! geocoding client and its callers. This layer performs no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
