// src/geocode/mod.rs
//! Directions-service client and the distance/coordinate extraction on its
//! responses.

pub mod destination;
pub mod directions;
pub mod route;

pub use destination::{destination_query, plus_encode};
pub use directions::{Directions, GoogleDirections};
pub use route::{extract, meters_to_km, Extracted, LatLng, RouteResult};
