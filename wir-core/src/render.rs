//! Turns a weather summary into an ordered, label-resolved view-model.
//!
//! The output is plain data: groups of label/value rows. Presentation layers
//! (the Dioxus result table, the CLI printer) render it declaratively, so no
//! markup is ever assembled from response strings.

use crate::labels::LabelTable;
use crate::summary::{format_value, WeatherSummary};
use serde::Serialize;
use std::fmt;

/// One `"<display name>": "<value><unit>"` line.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

/// A titled block of rows for one category.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct DisplayGroup {
    pub key: String,
    pub title: String,
    pub rows: Vec<DisplayRow>,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize)]
pub struct DisplayDocument {
    pub groups: Vec<DisplayGroup>,
}

impl DisplayDocument {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the display document for a summary.
///
/// Categories and metrics keep response order. Categories missing from the
/// label table are skipped; metrics missing from it use their raw key and no
/// unit. Values are formatted with [`format_value`].
pub fn render(summary: &WeatherSummary, labels: &LabelTable) -> DisplayDocument {
    let groups = summary
        .categories()
        .filter_map(|(key, _)| {
            let category = labels.category(key)?;
            let rows = summary
                .metrics(key)
                .map(|(metric, value)| DisplayRow {
                    label: category.metric_name(metric).to_string(),
                    value: format!("{}{}", format_value(value), category.metric_unit(metric)),
                })
                .collect();
            Some(DisplayGroup {
                key: key.to_string(),
                title: category.title.to_string(),
                rows,
            })
        })
        .collect();

    DisplayDocument { groups }
}

impl fmt::Display for DisplayDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", group.title)?;
            for row in &group.rows {
                writeln!(f, "  \"{}\": \"{}\"", row.label, row.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::WEATHER_LABELS;

    fn summary(json: &str) -> WeatherSummary {
        WeatherSummary::from_json_str(json).unwrap()
    }

    #[test]
    fn single_temperature_metric() {
        let doc = render(&summary(r#"{"temperature":{"avg_mean":25.3}}"#), &WEATHER_LABELS);
        assert_eq!(
            doc,
            DisplayDocument {
                groups: vec![DisplayGroup {
                    key: "temperature".to_string(),
                    title: "Temperature".to_string(),
                    rows: vec![DisplayRow {
                        label: "Average".to_string(),
                        value: "25.3°C".to_string(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn keeps_response_order_for_groups_and_rows() {
        let doc = render(
            &summary(
                r#"{
                    "wind": {"max_speed_ms": 12.4, "avg_speed_ms": 3.2},
                    "period": {"start": "2024-03-01", "end": "2024-03-15", "days": 15},
                    "temperature": {"avg_min": 18.0, "avg_mean": 25.3}
                }"#,
            ),
            &WEATHER_LABELS,
        );

        let titles: Vec<&str> = doc.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Wind", "Period", "Temperature"]);

        let wind: Vec<(&str, &str)> = doc.groups[0]
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(wind, vec![("Max Speed", "12.4m/s"), ("Average Speed", "3.2m/s")]);

        let period: Vec<&str> = doc.groups[1].rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(period, vec!["2024-03-01", "2024-03-15", "15"]);
    }

    #[test]
    fn unknown_category_is_omitted_and_unknown_metric_uses_raw_key() {
        let doc = render(
            &summary(
                r#"{
                    "pollen": {"index": 4},
                    "humidity": {"avg_pct": 71.5, "dew_point_c": 19.2}
                }"#,
            ),
            &WEATHER_LABELS,
        );

        assert_eq!(doc.groups.len(), 1);
        let humidity = &doc.groups[0];
        assert_eq!(humidity.title, "Humidity");
        assert_eq!(humidity.rows[0].label, "Average");
        assert_eq!(humidity.rows[0].value, "71.5%");
        assert_eq!(humidity.rows[1].label, "dew_point_c");
        assert_eq!(humidity.rows[1].value, "19.2");
    }

    #[test]
    fn count_metrics_get_days_suffix() {
        let doc = render(&summary(r#"{"precipitation":{"rainy_days":4}}"#), &WEATHER_LABELS);
        assert_eq!(doc.groups[0].rows[0].value, "4 days");
    }

    #[test]
    fn rendering_is_idempotent() {
        let s = summary(r#"{"temperature":{"avg_mean":25.3},"wind":{"avg_speed_ms":2.0}}"#);
        assert_eq!(render(&s, &WEATHER_LABELS), render(&s, &WEATHER_LABELS));
    }

    #[test]
    fn empty_summary_renders_empty_document() {
        let doc = render(&summary("{}"), &WEATHER_LABELS);
        assert!(doc.is_empty());
    }

    #[test]
    fn text_output_lists_rows_under_titles() {
        let doc = render(
            &summary(r#"{"temperature":{"avg_mean":25.3},"wind":{"avg_speed_ms":2.5}}"#),
            &WEATHER_LABELS,
        );
        assert_eq!(
            doc.to_string(),
            "Temperature\n  \"Average\": \"25.3°C\"\n\nWind\n  \"Average Speed\": \"2.5m/s\"\n"
        );
    }
}
