//! Reusable Dioxus RSX components for the weather front end.

mod app_header;
mod chart_gallery;
mod coordinate_display;
mod date_picker;
mod error_display;
mod loading_spinner;
mod map_picker;
mod notice;
mod result_table;
mod search_button;

pub use app_header::AppHeader;
pub use chart_gallery::{ChartGalleryPanel, GenerateGraphsButton};
pub use coordinate_display::CoordinateDisplay;
pub use date_picker::DatePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_picker::MapPicker;
pub use notice::Notice;
pub use result_table::ResultTable;
pub use search_button::SearchButton;
