//! Latitude/longitude readout for the current map selection.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the selected coordinate to four decimal places; renders nothing
/// until the map has been clicked.
#[component]
pub fn CoordinateDisplay() -> Element {
    let state = use_context::<AppState>();
    let Some(coordinate) = state.selection.read().coordinate() else {
        return rsx! {};
    };

    let lat = format!("{:.4}", coordinate.lat);
    let lng = format!("{:.4}", coordinate.lng);

    rsx! {
        div {
            style: "margin: 8px 0; font-size: 14px;",
            p {
                style: "margin: 0;",
                strong { "Latitude: " }
                "{lat}"
            }
            p {
                style: "margin: 0;",
                strong { "Longitude: " }
                "{lng}"
            }
        }
    }
}
