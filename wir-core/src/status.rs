use crate::error::QueryError;
use crate::labels::LabelTable;
use crate::render::{render, DisplayDocument};
use crate::selection::SelectionState;
use crate::summary::WeatherSummary;

/// Lifecycle of the result pane.
///
/// A new search always passes through `Loading`, which drops whatever was on
/// screen. A failure never brings the previous document back.
#[derive(Debug, Default, PartialEq, Clone)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Loaded(DisplayDocument),
    Failed(String),
}

impl QueryStatus {
    /// Clear any displayed result and show the loading indicator.
    pub fn begin(&mut self) {
        *self = QueryStatus::Loading;
    }

    /// Settle an outstanding query.
    pub fn complete(&mut self, result: Result<WeatherSummary, QueryError>, labels: &LabelTable) {
        *self = match result {
            Ok(summary) => QueryStatus::Loaded(render(&summary, labels)),
            Err(e) => {
                log::error!("Failed to fetch weather data: {}", e);
                QueryStatus::Failed(e.to_string())
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryStatus::Loading)
    }

    pub fn document(&self) -> Option<&DisplayDocument> {
        match self {
            QueryStatus::Loaded(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            QueryStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Whether the search trigger should be enabled.
pub fn can_search(selection: &SelectionState, status: &QueryStatus) -> bool {
    selection.is_ready() && !status.is_loading()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::labels::WEATHER_LABELS;

    fn summary(json: &str) -> WeatherSummary {
        WeatherSummary::from_json_str(json).unwrap()
    }

    #[test]
    fn begin_clears_previous_document() {
        let mut status = QueryStatus::Idle;
        status.complete(Ok(summary(r#"{"temperature":{"avg_mean":25.3}}"#)), &WEATHER_LABELS);
        assert!(status.document().is_some());

        status.begin();
        assert!(status.is_loading());
        assert!(status.document().is_none());
    }

    #[test]
    fn second_success_fully_replaces_first() {
        let mut status = QueryStatus::Idle;
        status.begin();
        status.complete(
            Ok(summary(r#"{"temperature":{"avg_mean":25.3},"wind":{"avg_speed_ms":3.0}}"#)),
            &WEATHER_LABELS,
        );
        status.begin();
        status.complete(Ok(summary(r#"{"humidity":{"avg_pct":60}}"#)), &WEATHER_LABELS);

        let doc = status.document().unwrap();
        assert_eq!(doc.groups.len(), 1);
        assert_eq!(doc.groups[0].title, "Humidity");
        assert_eq!(doc.groups[0].rows.len(), 1);
    }

    #[test]
    fn failure_leaves_display_cleared_and_stops_loading() {
        let mut status = QueryStatus::Idle;
        status.complete(Ok(summary(r#"{"temperature":{"avg_mean":25.3}}"#)), &WEATHER_LABELS);

        status.begin();
        status.complete(
            Err(QueryError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }),
            &WEATHER_LABELS,
        );

        assert!(!status.is_loading());
        assert!(status.document().is_none());
        assert_eq!(
            status.failure(),
            Some("Weather service error: 500 Internal Server Error")
        );
    }

    #[test]
    fn search_trigger_gated_by_selection_and_loading() {
        let mut selection = SelectionState::new();
        let mut status = QueryStatus::Idle;
        assert!(!can_search(&selection, &status));

        selection.set_coordinate(Coordinate::new(-18.9184, -48.2772));
        assert!(!can_search(&selection, &status));

        selection.set_date("2024-03-15");
        assert!(can_search(&selection, &status));

        status.begin();
        assert!(!can_search(&selection, &status));

        status.complete(Err(QueryError::Transport("refused".into())), &WEATHER_LABELS);
        assert!(can_search(&selection, &status));
    }
}
