//! Page header: optional logo beside the title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    #[props(default = "Will It Rain On My Parade?".to_string())]
    pub title: String,
    #[props(default = "Climate probability analysis with NASA data".to_string())]
    pub subtitle: String,
    /// Image URL for the logo; no logo is drawn when empty
    #[props(default)]
    pub logo_src: String,
    #[props(default = "NASA Logo".to_string())]
    pub logo_alt: String,
}

#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        header {
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 0; margin-bottom: 12px; border-bottom: 1px solid #e0e0e0;",
            if !props.logo_src.is_empty() {
                div {
                    class: "header-logo",
                    img {
                        src: "{props.logo_src}",
                        alt: "{props.logo_alt}",
                        style: "height: 56px; width: auto;",
                    }
                }
            }
            div {
                class: "header-text",
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 24px; color: #2c3e50;",
                    "{props.title}"
                }
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
