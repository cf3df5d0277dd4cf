use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Path of the weather summary endpoint, relative to the service base URL.
pub const WEATHER_PATH: &str = "/weather";

/// A request for the weather summary at one coordinate on one date.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub coordinate: Coordinate,
    /// `YYYY-MM-DD`, passed through untouched
    pub event_date: String,
}

impl WeatherQuery {
    pub fn new(coordinate: Coordinate, event_date: impl Into<String>) -> Self {
        Self {
            coordinate,
            event_date: event_date.into(),
        }
    }

    /// The `lat`, `lon` and `event_date` query parameters, in that order.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("lat", self.coordinate.lat.to_string()),
            ("lon", self.coordinate.lng.to_string()),
            ("event_date", self.event_date.clone()),
        ]
    }

    /// Human-readable summary used for the in-flight notice.
    pub fn describe(&self) -> String {
        format!(
            "Fetching data for Lat: {}, Lng: {} on {}",
            self.coordinate.lat, self.coordinate.lng, self.event_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_are_not_reformatted() {
        let query = WeatherQuery::new(Coordinate::new(-18.9184, -48.2772), "2024-03-15");
        let pairs = query.query_pairs();
        assert_eq!(pairs[0], ("lat", "-18.9184".to_string()));
        assert_eq!(pairs[1], ("lon", "-48.2772".to_string()));
        assert_eq!(pairs[2], ("event_date", "2024-03-15".to_string()));
    }

    #[test]
    fn describe_names_coordinate_and_date() {
        let query = WeatherQuery::new(Coordinate::new(1.25, -3.5), "2025-12-01");
        assert_eq!(
            query.describe(),
            "Fetching data for Lat: 1.25, Lng: -3.5 on 2025-12-01"
        );
    }
}
