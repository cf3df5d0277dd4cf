use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair picked on the map.
///
/// Replaced wholesale on every click; no bounds checking is done because the
/// map widget only reports positions it can display.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Initial map centre (Uberlândia, MG).
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    lat: -18.9184,
    lng: -48.2772,
};

/// Initial map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Four decimal places, matching the on-page readout.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
