//! The coordinate/date pair the user has chosen.
//!
//! All mutation goes through [`SelectionState::set_coordinate`] and
//! [`SelectionState::set_date`]; readiness is derived on every read, so there
//! is nothing to keep in sync.

use crate::coordinate::Coordinate;
use crate::error::QueryError;
use crate::query::WeatherQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    coordinate: Option<Coordinate>,
    date: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected coordinate. Only the latest click survives.
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = Some(coordinate);
    }

    /// Store the date exactly as entered. An empty string keeps the selection
    /// incomplete.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// True iff a coordinate is set and the date is set and non-empty.
    pub fn is_ready(&self) -> bool {
        self.coordinate.is_some() && self.date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Build the request for the current selection, or report that the
    /// selection is incomplete.
    pub fn to_query(&self) -> Result<WeatherQuery, QueryError> {
        match (self.coordinate, self.date.as_deref()) {
            (Some(coordinate), Some(date)) if !date.is_empty() => {
                Ok(WeatherQuery::new(coordinate, date))
            }
            _ => Err(QueryError::IncompleteSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_not_ready() {
        let selection = SelectionState::new();
        assert!(!selection.is_ready());
        assert_eq!(selection.to_query(), Err(QueryError::IncompleteSelection));
    }

    #[test]
    fn ready_only_when_both_fields_are_set() {
        let coordinate = Coordinate::new(-18.9184, -48.2772);

        let mut only_coordinate = SelectionState::new();
        only_coordinate.set_coordinate(coordinate);
        assert!(!only_coordinate.is_ready());

        let mut only_date = SelectionState::new();
        only_date.set_date("2024-03-15");
        assert!(!only_date.is_ready());

        let mut both = only_coordinate.clone();
        both.set_date("2024-03-15");
        assert!(both.is_ready());
    }

    #[test]
    fn empty_date_string_counts_as_unset() {
        let mut selection = SelectionState::new();
        selection.set_coordinate(Coordinate::new(10.0, 20.0));
        selection.set_date("2024-03-15");
        assert!(selection.is_ready());

        selection.set_date("");
        assert!(!selection.is_ready());
        assert_eq!(selection.to_query(), Err(QueryError::IncompleteSelection));
    }

    #[test]
    fn new_click_replaces_previous_coordinate() {
        let mut selection = SelectionState::new();
        selection.set_coordinate(Coordinate::new(1.0, 2.0));
        selection.set_coordinate(Coordinate::new(3.0, 4.0));
        assert_eq!(selection.coordinate(), Some(Coordinate::new(3.0, 4.0)));
    }

    #[test]
    fn query_carries_literal_values() {
        let mut selection = SelectionState::new();
        selection.set_coordinate(Coordinate::new(-18.9184, -48.2772));
        selection.set_date("2024-03-15");

        let query = selection.to_query().unwrap();
        assert_eq!(query.coordinate, Coordinate::new(-18.9184, -48.2772));
        assert_eq!(query.event_date, "2024-03-15");
    }
}
