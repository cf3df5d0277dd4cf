//! Fixed display names and units for the categories and metrics the weather
//! service reports.

/// Display name and optional unit suffix for one metric.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MetricLabel {
    pub key: &'static str,
    pub name: &'static str,
    pub unit: Option<&'static str>,
}

/// Display name for one category plus the labels of its metrics.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CategoryLabel {
    pub key: &'static str,
    pub title: &'static str,
    pub metrics: &'static [MetricLabel],
}

/// Static lookup table owned by the renderer. Order in the table is
/// irrelevant; display order comes from the response.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LabelTable {
    pub categories: &'static [CategoryLabel],
}

impl LabelTable {
    pub fn category(&self, key: &str) -> Option<&CategoryLabel> {
        self.categories.iter().find(|c| c.key == key)
    }
}

impl CategoryLabel {
    pub fn metric(&self, key: &str) -> Option<&MetricLabel> {
        self.metrics.iter().find(|m| m.key == key)
    }

    /// Display name for a metric, falling back to the raw key.
    pub fn metric_name<'a>(&self, key: &'a str) -> &'a str {
        self.metric(key).map_or(key, |m| m.name)
    }

    /// Unit suffix for a metric, empty when unknown or unitless.
    pub fn metric_unit(&self, key: &str) -> &'static str {
        self.metric(key).and_then(|m| m.unit).unwrap_or("")
    }
}

const fn metric(key: &'static str, name: &'static str, unit: Option<&'static str>) -> MetricLabel {
    MetricLabel { key, name, unit }
}

const CELSIUS: Option<&str> = Some("°C");
const MM: Option<&str> = Some("mm");
const MS: Option<&str> = Some("m/s");
const PCT: Option<&str> = Some("%");
const DAYS: Option<&str> = Some(" days");

pub const WEATHER_LABELS: LabelTable = LabelTable {
    categories: &[
        CategoryLabel {
            key: "period",
            title: "Period",
            metrics: &[
                metric("start", "Start", None),
                metric("end", "End", None),
                metric("days", "Days", None),
            ],
        },
        CategoryLabel {
            key: "temperature",
            title: "Temperature",
            metrics: &[
                metric("avg_mean", "Average", CELSIUS),
                metric("avg_max", "Average Max", CELSIUS),
                metric("avg_min", "Average Min", CELSIUS),
                metric("absolute_max", "Absolute Max", CELSIUS),
                metric("absolute_min", "Absolute Min", CELSIUS),
                metric("days_above_35c", "Hot Days (>35°C)", DAYS),
                metric("days_below_0c", "Cold Days (<0°C)", DAYS),
            ],
        },
        CategoryLabel {
            key: "precipitation",
            title: "Precipitation",
            metrics: &[
                metric("total_mm", "Total", MM),
                metric("avg_daily_mm", "Daily Average", MM),
                metric("max_daily_mm", "Daily Max", MM),
                metric("rainy_days", "Rainy Days", DAYS),
                metric("heavy_rain_days", "Heavy Rain Days (>10mm)", DAYS),
            ],
        },
        CategoryLabel {
            key: "wind",
            title: "Wind",
            metrics: &[
                metric("avg_speed_ms", "Average Speed", MS),
                metric("max_speed_ms", "Max Speed", MS),
                metric("windy_days", "Windy Days (>10 m/s)", DAYS),
                metric("very_windy_days", "Very Windy Days (>15 m/s)", DAYS),
            ],
        },
        CategoryLabel {
            key: "humidity",
            title: "Humidity",
            metrics: &[
                metric("avg_pct", "Average", PCT),
                metric("max_pct", "Max", PCT),
                metric("min_pct", "Min", PCT),
                metric("uncomfortable_days", "Uncomfortable Days", DAYS),
            ],
        },
        CategoryLabel {
            key: "solar_cloud",
            title: "Solar Radiation & Clouds",
            metrics: &[
                metric("avg_solar_kwh_m2", "Average Solar Radiation", Some(" kWh/m²")),
                metric("avg_cloud_cover_pct", "Average Cloud Cover", PCT),
                metric("cloudy_days", "Cloudy Days", DAYS),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_metric_has_name_and_unit() {
        let temperature = WEATHER_LABELS.category("temperature").unwrap();
        assert_eq!(temperature.metric_name("avg_mean"), "Average");
        assert_eq!(temperature.metric_unit("avg_mean"), "°C");
    }

    #[test]
    fn unknown_metric_falls_back_to_raw_key() {
        let wind = WEATHER_LABELS.category("wind").unwrap();
        assert_eq!(wind.metric_name("gust_ms"), "gust_ms");
        assert_eq!(wind.metric_unit("gust_ms"), "");
    }

    #[test]
    fn unknown_category_is_absent() {
        assert!(WEATHER_LABELS.category("pollen").is_none());
        assert_eq!(WEATHER_LABELS.category("period").map(|c| c.title), Some("Period"));
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<&str> = WEATHER_LABELS.categories.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), WEATHER_LABELS.categories.len());
    }
}
