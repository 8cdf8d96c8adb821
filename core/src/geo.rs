use crate::{GameError, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Distances stay metric inside this module; callers convert to feet.
pub const FEET_PER_METER: f64 = 3.28084;

/// A geographic point in decimal degrees.
///
/// Range validity (`-90 ≤ lat ≤ 90`, `-180 ≤ lng ≤ 180`) is not enforced
/// here; shells are expected to only hand over in-region points. See
/// [`LatLng::is_in_range`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// South-west/north-east rectangle delimiting the play area.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    sw: LatLng,
    ne: LatLng,
}

impl GeoBounds {
    pub fn new(sw: LatLng, ne: LatLng) -> Result<Self> {
        if sw.lat <= ne.lat && sw.lng <= ne.lng {
            Ok(Self { sw, ne })
        } else {
            Err(GameError::InvalidBounds)
        }
    }

    pub const fn sw(self) -> LatLng {
        self.sw
    }

    pub const fn ne(self) -> LatLng {
        self.ne
    }

    /// Edges are inclusive.
    pub fn contains(self, point: LatLng) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&point.lat)
            && (self.sw.lng..=self.ne.lng).contains(&point.lng)
    }
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Great-circle distance between two points via the haversine formula.
/// Symmetric, and zero for identical points.
pub fn haversine_m(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Initial bearing along the great-circle path from `from` to `to`,
/// normalized into `[0, 360)`.
///
/// The direction is mathematically undefined when both points coincide;
/// that case is pinned to `0.0` so no NaN reaches the compass label.
pub fn initial_bearing_deg(from: LatLng, to: LatLng) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
