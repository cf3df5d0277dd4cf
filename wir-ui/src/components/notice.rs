//! Informational notice (in-flight request, incomplete selection).

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
}

#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div {
            role: "status",
            style: "padding: 8px 16px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9;",
            "{props.message}"
        }
    }
}
