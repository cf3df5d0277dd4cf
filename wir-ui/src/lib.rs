//! Shared Dioxus components and Leaflet bridge for the Will It Rain front end.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map picker via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `search`: the search and generate-graphs actions
//! - `components`: Reusable RSX components (map, date input, result table, gallery, ...)

pub mod components;
pub mod js_bridge;
pub mod search;
pub mod state;
