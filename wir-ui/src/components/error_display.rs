//! Failed-query banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "Could not load weather data".to_string())]
    pub heading: String,
}

/// Shows why the last search failed. The result table stays empty.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.heading}: " }
            "{props.message}"
            p {
                style: "margin: 4px 0 0 0; font-size: 12px;",
                "Check the location and date, then search again."
            }
        }
    }
}
