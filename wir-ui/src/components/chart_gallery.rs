//! Historic measurement charts rendered by the weather service.

use crate::search::generate_graphs;
use crate::state::AppState;
use dioxus::prelude::*;

/// Trigger that shows (or reloads) the chart gallery.
#[component]
pub fn GenerateGraphsButton() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        button {
            r#type: "button",
            style: "padding: 6px 18px; font-size: 16px;",
            onclick: move |_| generate_graphs(state),
            "Generate graphs"
        }
    }
}

/// The ten chart images, each with a shared cache-busting token so every
/// activation forces a fresh download. Hidden until first activated.
#[component]
pub fn ChartGalleryPanel() -> Element {
    let state = use_context::<AppState>();
    let gallery = *state.gallery.read();
    if !gallery.is_visible() {
        return rsx! {};
    }
    let images = gallery.images(&state.config.read());

    rsx! {
        div {
            style: "margin-top: 16px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h2 {
                style: "font-size: 18px; margin: 0 0 8px 0;",
                "Historic Measurements"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(400px, 1fr)); gap: 12px;",
                for image in images.iter() {
                    img {
                        key: "{image.title}",
                        src: "{image.url}",
                        alt: "{image.title}",
                        style: "width: 100%;",
                    }
                }
            }
        }
    }
}
