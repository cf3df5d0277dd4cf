//! Search trigger.

use crate::search::start_search;
use crate::state::AppState;
use dioxus::prelude::*;
use wir_core::can_search;

/// Enabled only while the selection is complete and no query is outstanding.
#[component]
pub fn SearchButton() -> Element {
    let state = use_context::<AppState>();
    let loading = state.status.read().is_loading();
    let enabled = can_search(&state.selection.read(), &state.status.read());

    rsx! {
        button {
            r#type: "button",
            disabled: !enabled,
            style: "padding: 6px 18px; font-size: 16px;",
            onclick: move |_| start_search(state),
            if loading { "Searching..." } else { "Search" }
        }
    }
}
