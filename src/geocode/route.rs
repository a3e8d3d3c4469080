// src/geocode/route.rs
use serde::Deserialize;

use crate::error::{Error, Result};

/// Directions response. Only the fields we read are modelled; everything is
/// optional so a partial body still deserializes and the gap is reported by
/// `extract` instead of a serde error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Leg {
    pub distance: Option<Quantity>,
    pub start_location: Option<Location>,
    pub end_location: Option<Location>,
}

/// `{ "text": "4.5 km", "value": 4500 }`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Quantity {
    pub value: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    fn to_latlng(&self) -> Option<LatLng> {
        Some(LatLng { lat: self.lat?, lng: self.lng? })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extracted {
    pub distance_km: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl RouteResult {
    /// `routes[0].legs[0]`, or a geocode error naming what was missing.
    pub fn first_leg(&self) -> Result<&Leg> {
        let route = self.routes.first().ok_or_else(|| {
            let status = self.status.as_deref().unwrap_or("no status");
            match &self.error_message {
                Some(msg) => Error::Geocode(format!("no routes ({status}: {msg})")),
                None => Error::Geocode(format!("no routes ({status})")),
            }
        })?;
        route
            .legs
            .first()
            .ok_or_else(|| Error::Geocode(s!("route has no legs")))
    }

    /// Where the first leg starts, i.e. the geocoded origin.
    pub fn start_location(&self) -> Option<LatLng> {
        self.first_leg().ok()?.start_location.as_ref()?.to_latlng()
    }
}

/// Metres to whole kilometres, rounded up.
pub fn meters_to_km(meters: u64) -> u64 {
    meters.div_ceil(1000)
}

/// Distance and destination coordinates from the first leg of the first route.
pub fn extract(result: &RouteResult) -> Result<Extracted> {
    let leg = result.first_leg()?;
    let meters = leg
        .distance
        .as_ref()
        .and_then(|d| d.value)
        .ok_or(Error::MalformedResponse("routes[0].legs[0].distance.value"))?;
    let end = leg
        .end_location
        .as_ref()
        .and_then(Location::to_latlng)
        .ok_or(Error::MalformedResponse("routes[0].legs[0].end_location"))?;

    Ok(Extracted {
        distance_km: meters_to_km(meters),
        latitude: end.lat,
        longitude: end.lng,
    })
}
