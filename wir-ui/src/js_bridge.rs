//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet is loaded from a CDN at runtime and the map picker script in
//! `assets/js/map-picker.js` is evaluated at global scope once `L` exists.
//! Clicks come back into Rust through a wasm-bindgen closure stored on `window`.

use wasm_bindgen::prelude::*;
use wir_core::Coordinate;

static MAP_PICKER_JS: &str = include_str!("../assets/js/map-picker.js");

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Name of the `window` property the map picker calls on every click.
const MAP_CLICK_CALLBACK: &str = "__wirOnMapClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WIR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Leaflet stylesheet and script tags if they are not already present.
pub fn load_leaflet() {
    call_js(&format!(
        r#"
        if (!document.getElementById('wir-leaflet-css')) {{
            var css = document.createElement('link');
            css.id = 'wir-leaflet-css';
            css.rel = 'stylesheet';
            css.href = '{LEAFLET_CSS_URL}';
            document.head.appendChild(css);
        }}
        if (!document.getElementById('wir-leaflet-js')) {{
            var js = document.createElement('script');
            js.id = 'wir-leaflet-js';
            js.src = '{LEAFLET_JS_URL}';
            document.head.appendChild(js);
        }}
        "#,
    ));
}

/// Build the polling snippet that waits for Leaflet and the container, then
/// creates the map.
fn map_init_script(container_id: &str, center: Coordinate, zoom: u8) -> String {
    let script = serde_json::to_string(MAP_PICKER_JS).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    if (typeof window.initMapPicker === 'undefined') {{
                        (0, eval)({script});
                        window.initMapPicker = initMapPicker;
                    }}
                    try {{
                        window.initMapPicker('{container_id}', {lat}, {lng}, {zoom});
                    }} catch(e) {{ console.error('[WIR] initMapPicker error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        lat = center.lat,
        lng = center.lng,
    )
}

/// Create the Leaflet map in `container_id` and route clicks to `on_click`.
///
/// Call once per mounted container; the closure lives for the rest of the page.
pub fn init_map_picker<F>(container_id: &str, center: Coordinate, zoom: u8, on_click: F)
where
    F: FnMut(f64, f64) + 'static,
{
    let callback = Closure::<dyn FnMut(f64, f64)>::new(on_click);
    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(
                &window,
                &JsValue::from_str(MAP_CLICK_CALLBACK),
                callback.as_ref(),
            )
            .is_err()
            {
                log::error!("Failed to register map click callback");
            }
        }
        None => log::error!("No window available for the map picker"),
    }
    callback.forget();

    web_sys::console::log_1(&format!("[WIR Debug] Initiating map picker in #{}", container_id).into());
    call_js(&map_init_script(container_id, center, zoom));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_script_targets_container_and_center() {
        let script = map_init_script("map-picker", Coordinate::new(-18.9184, -48.2772), 13);
        assert!(script.contains("window.initMapPicker('map-picker', -18.9184, -48.2772, 13)"));
        assert!(script.contains("document.getElementById('map-picker')"));
    }

    #[test]
    fn picker_script_is_embedded_as_a_js_string() {
        let script = map_init_script("m", Coordinate::new(0.0, 0.0), 3);
        assert!(script.contains(r#"(0, eval)("// Leaflet map picker."#));
        assert!(script.contains("__wirOnMapClick"));
    }
}
