//! User-triggered actions: search and generate graphs.

use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use wir_core::{dispatch_search, SearchOutcome, WEATHER_LABELS};

/// Validate the selection and dispatch a weather query.
///
/// With an incomplete selection the user is told to finish it and nothing
/// else changes. Otherwise the result pane is cleared, the loading indicator
/// is shown, and the request runs in the background. A search while another
/// is outstanding is ignored; the button is disabled in that state anyway.
pub fn start_search(mut state: AppState) {
    let selection = state.selection.read().clone();
    let config = state.config.read().clone();

    spawn(async move {
        match dispatch_search(&config, &selection, &WEATHER_LABELS, &mut state).await {
            Ok(SearchOutcome::Skipped) => {}
            Err(e) if e.is_incomplete_selection() => state.notice.set(Some(e.to_string())),
            Ok(SearchOutcome::Completed) | Err(_) => state.notice.set(None),
        }
    });
}

/// Show the chart gallery with a fresh cache-busting token.
pub fn generate_graphs(mut state: AppState) {
    let token = state
        .gallery
        .write()
        .activate(chrono::Utc::now().timestamp_millis());
    info!("Reloading charts with token {}", token);
}
