//! `search`: one weather query, printed as a labelled table.

use anyhow::Context;
use log::info;
use wir_core::dates::parse_event_date;
use wir_core::{
    dispatch_search, Coordinate, QueryStatus, SelectionState, ServiceConfig, WEATHER_LABELS,
};

/// clap value parser: the date must be a real calendar date, but it is passed
/// on exactly as typed.
pub fn parse_date_arg(s: &str) -> Result<String, String> {
    parse_event_date(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Run a weather query and return the rendered summary as text.
pub async fn run_search(
    config: &ServiceConfig,
    lat: f64,
    lon: f64,
    date: &str,
) -> anyhow::Result<String> {
    let mut selection = SelectionState::new();
    selection.set_coordinate(Coordinate::new(lat, lon));
    selection.set_date(date);

    let mut status = QueryStatus::Idle;
    if let Err(e) = dispatch_search(config, &selection, &WEATHER_LABELS, &mut status).await {
        anyhow::bail!("Weather query failed: {}", e);
    }
    let document = status
        .document()
        .context("weather query finished without a result")?;

    info!("Rendered {} categories", document.groups.len());
    if document.is_empty() {
        return Ok("No statistics available for this location and date.\n".to_string());
    }
    Ok(document.to_string())
}
