//! Leaflet map that turns a click into the selected coordinate.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use wir_core::coordinate::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};
use wir_core::Coordinate;

#[derive(Props, Clone, PartialEq)]
pub struct MapPickerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    #[props(default = "map-picker".to_string())]
    pub id: String,
    #[props(default = 400)]
    pub height: u32,
}

/// Interactive map. Each click replaces the marker and the selected coordinate.
#[component]
pub fn MapPicker(props: MapPickerProps) -> Element {
    let state = use_context::<AppState>();
    let container_id = props.id.clone();

    // Runs once on mount; the map keeps reporting clicks afterwards.
    use_effect(move || {
        let mut state = state;
        js_bridge::load_leaflet();
        js_bridge::init_map_picker(
            &container_id,
            DEFAULT_MAP_CENTER,
            DEFAULT_MAP_ZOOM,
            move |lat, lng| state.set_coordinate(Coordinate::new(lat, lng)),
        );
    });

    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
