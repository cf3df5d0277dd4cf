//! Core types and pure logic for the Will It Rain weather front end.
//!
//! Everything in this crate compiles for both native targets and
//! `wasm32-unknown-unknown`, so the web app and the CLI share one
//! implementation of selection gating, result rendering and chart URLs.
//!
//! - `selection`: the coordinate/date pair that gates a search
//! - `query`: the request derived from a complete selection
//! - `summary` / `labels` / `render`: response parsing and the display view-model
//! - `status`: idle/loading/loaded/failed lifecycle of the result pane
//! - `charts`: the fixed chart set and cache-busting gallery
//! - `config`: service base URL and timeout
//! - `client` (feature `api`): the reqwest-based weather service client
//! - `dispatch` (feature `api`): validate, clear, fetch and settle one search

pub mod charts;
pub mod config;
pub mod coordinate;
pub mod dates;
pub mod error;
pub mod labels;
pub mod query;
pub mod render;
pub mod selection;
pub mod status;
pub mod summary;

#[cfg(feature = "api")]
pub mod client;
#[cfg(feature = "api")]
pub mod dispatch;

pub use charts::{ChartGallery, ChartImage, ChartSpec, CHART_SET};
pub use config::ServiceConfig;
pub use coordinate::Coordinate;
pub use error::QueryError;
pub use labels::{LabelTable, WEATHER_LABELS};
pub use query::WeatherQuery;
pub use render::{render, DisplayDocument, DisplayGroup, DisplayRow};
pub use selection::SelectionState;
pub use status::{can_search, QueryStatus};
pub use summary::WeatherSummary;

#[cfg(feature = "api")]
pub use client::WeatherClient;
#[cfg(feature = "api")]
pub use dispatch::{dispatch_search, SearchOutcome, SearchSink};
