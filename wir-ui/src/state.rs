//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The selection is only ever changed through `set_coordinate` and `set_date`.

use dioxus::prelude::*;
use wir_core::{
    ChartGallery, Coordinate, QueryStatus, SearchSink, SelectionState, ServiceConfig, WeatherQuery,
};

/// Shared application state for the weather front end.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Chosen coordinate and date
    pub selection: Signal<SelectionState>,
    /// Result pane lifecycle (idle, loading, loaded, failed)
    pub status: Signal<QueryStatus>,
    /// Informational or incomplete-selection notice
    pub notice: Signal<Option<String>>,
    /// Chart gallery visibility and cache-busting token
    pub gallery: Signal<ChartGallery>,
    /// Weather service location
    pub config: Signal<ServiceConfig>,
}

impl AppState {
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            selection: Signal::new(SelectionState::new()),
            status: Signal::new(QueryStatus::Idle),
            notice: Signal::new(None),
            gallery: Signal::new(ChartGallery::new()),
            config: Signal::new(config),
        }
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        log::debug!("Selected coordinate: {}", coordinate);
        self.selection.write().set_coordinate(coordinate);
    }

    pub fn set_date(&mut self, date: String) {
        self.selection.write().set_date(date);
    }
}

/// Searches write the result pane through `status` and announce the
/// outgoing request in `notice`.
impl SearchSink for AppState {
    fn update_status<R>(&mut self, f: impl FnOnce(&mut QueryStatus) -> R) -> R {
        f(&mut *self.status.write())
    }

    fn dispatched(&mut self, query: &WeatherQuery) {
        self.notice.set(Some(query.describe()));
    }
}
