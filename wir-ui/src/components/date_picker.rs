//! Single date input for the event date.

use crate::state::AppState;
use dioxus::prelude::*;

/// Calendar input bound to the selection's date. The value is stored exactly
/// as the browser reports it (`YYYY-MM-DD`, or empty when cleared).
#[component]
pub fn DatePicker() -> Element {
    let mut state = use_context::<AppState>();
    let date = state.selection.read().date().unwrap_or_default().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.set_date(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "date-picker",
                style: "font-weight: bold; font-size: 18px;",
                "Select a date: "
            }
            input {
                id: "date-picker",
                r#type: "date",
                value: "{date}",
                oninput: on_change,
            }
        }
    }
}
