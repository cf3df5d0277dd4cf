//! Will It Rain On My Parade?
//!
//! Pick a spot on the map and a date, fetch the historic weather summary for
//! it, and optionally pull up the service's measurement charts.
//!
//! Data flow:
//! 1. Map clicks and the date input update the selection in `AppState`.
//! 2. Search validates the selection, clears the result pane, shows the
//!    loading indicator and issues `GET /weather` in the background.
//! 3. On success the summary is rendered to a display document and shown as
//!    a table; on failure the pane stays empty and the error is shown.
//! 4. "Generate graphs" shows the chart gallery with a fresh cache-busting token.

use dioxus::prelude::*;
use wir_core::{QueryStatus, ServiceConfig};
use wir_ui::components::{
    AppHeader, ChartGalleryPanel, CoordinateDisplay, DatePicker, ErrorDisplay,
    GenerateGraphsButton, LoadingSpinner, MapPicker, Notice, ResultTable, SearchButton,
};
use wir_ui::state::AppState;

/// Weather service base URL, fixed at build time.
const SERVICE_BASE_URL: Option<&str> = option_env!("WIR_SERVICE_BASE_URL");
/// Header logo URL, e.g. a NASA logo served next to the bundle.
const LOGO_SRC: Option<&str> = option_env!("WIR_LOGO_SRC");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Weather service: {}", service_config().service_base_url);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wir-root"))
        .launch(App);
}

fn service_config() -> ServiceConfig {
    match SERVICE_BASE_URL {
        Some(url) if !url.is_empty() => ServiceConfig::with_base_url(url),
        _ => ServiceConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::with_config(service_config()));

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            AppHeader { logo_src: LOGO_SRC.unwrap_or_default().to_string() }

            MapPicker {}

            CoordinateDisplay {}

            div {
                style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: center; margin: 12px 0;",
                DatePicker {}
                SearchButton {}
                GenerateGraphsButton {}
            }

            if let Some(message) = state.notice.read().as_ref() {
                Notice { message: message.clone() }
            }

            ResultPane {}

            ChartGalleryPanel {}
        }
    }
}

/// Loading indicator, failure banner or result table, depending on the query status.
#[component]
fn ResultPane() -> Element {
    let state = use_context::<AppState>();
    let status = state.status.read().clone();

    match status {
        QueryStatus::Idle => rsx! {},
        QueryStatus::Loading => rsx! { LoadingSpinner {} },
        QueryStatus::Failed(message) => rsx! { ErrorDisplay { message } },
        QueryStatus::Loaded(document) => rsx! { ResultTable { document } },
    }
}
