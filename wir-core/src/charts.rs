//! The fixed set of historic-measurement charts served by the weather service.

use crate::config::ServiceConfig;
use serde::Serialize;

/// One chart image served under `/graphs/<file>.png`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ChartSpec {
    pub file: &'static str,
    pub title: &'static str,
}

/// All charts, in display order.
pub const CHART_SET: [ChartSpec; 10] = [
    ChartSpec { file: "cloud_cover_pct", title: "Cloud Coverage" },
    ChartSpec { file: "humidity_pct", title: "Humidity" },
    ChartSpec { file: "precipitation_mm", title: "Precipitation" },
    ChartSpec { file: "solar_radiation_kwh_m2", title: "Solar Radiation" },
    ChartSpec { file: "specific_humidity_gkg", title: "Specific Humidity" },
    ChartSpec { file: "temp_avg_c", title: "Average Temperature" },
    ChartSpec { file: "temp_max_c", title: "Max Temperature" },
    ChartSpec { file: "temp_min_c", title: "Min Temperature" },
    ChartSpec { file: "wind_speed_max_ms", title: "Max Wind Speed" },
    ChartSpec { file: "wind_speed_ms", title: "Wind Speed" },
];

/// A resolved, cache-busted chart image.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ChartImage {
    pub title: String,
    pub url: String,
}

/// Visibility and cache-busting token of the chart gallery.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ChartGallery {
    visible: bool,
    token: Option<i64>,
}

impl ChartGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the gallery and mint a new token from the current time.
    ///
    /// Tokens strictly increase, so activating twice within the same
    /// millisecond still forces a reload.
    pub fn activate(&mut self, now_millis: i64) -> i64 {
        let token = match self.token {
            Some(prev) if now_millis <= prev => prev + 1,
            _ => now_millis,
        };
        self.visible = true;
        self.token = Some(token);
        token
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Image URLs for every chart, empty until the gallery is activated.
    pub fn images(&self, config: &ServiceConfig) -> Vec<ChartImage> {
        let Some(token) = self.token.filter(|_| self.visible) else {
            return Vec::new();
        };
        CHART_SET
            .iter()
            .map(|spec| ChartImage {
                title: spec.title.to_string(),
                url: format!("{}?t={}", config.graph_url(spec.file), token),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServiceConfig {
        ServiceConfig {
            service_base_url: "http://localhost:5001".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn hidden_gallery_has_no_images() {
        assert!(ChartGallery::new().images(&config()).is_empty());
        assert!(!ChartGallery::new().is_visible());
    }

    #[test]
    fn activation_builds_ten_urls_sharing_one_token() {
        let mut gallery = ChartGallery::new();
        let token = gallery.activate(1_700_000_000_000);
        let images = gallery.images(&config());

        assert!(gallery.is_visible());
        assert_eq!(images.len(), 10);
        assert_eq!(images[0].title, "Cloud Coverage");
        assert_eq!(
            images[0].url,
            "http://localhost:5001/graphs/cloud_cover_pct.png?t=1700000000000"
        );
        assert_eq!(images[9].title, "Wind Speed");
        assert!(images.iter().all(|i| i.url.ends_with(&format!("?t={}", token))));
    }

    #[test]
    fn reactivation_changes_every_url() {
        let mut gallery = ChartGallery::new();
        gallery.activate(1_000);
        let first = gallery.images(&config());

        // Same clock reading: token must still move forward.
        let token = gallery.activate(1_000);
        let second = gallery.images(&config());

        assert_eq!(token, 1_001);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_ne!(a.url, b.url);
            assert_eq!(a.title, b.title);
        }
    }

    #[test]
    fn later_clock_reading_is_used_as_is() {
        let mut gallery = ChartGallery::new();
        gallery.activate(1_000);
        assert_eq!(gallery.activate(5_000), 5_000);
    }
}
