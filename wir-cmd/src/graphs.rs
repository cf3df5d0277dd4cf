//! `graphs`: list the chart image URLs for one gallery activation.

use wir_core::{ChartGallery, ServiceConfig};

pub fn run_graphs(config: &ServiceConfig, now_millis: i64) -> String {
    let mut gallery = ChartGallery::new();
    gallery.activate(now_millis);
    gallery
        .images(config)
        .iter()
        .map(|image| format!("{:<20} {}\n", image.title, image.url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_charts_with_token() {
        let output = run_graphs(&ServiceConfig::default(), 42);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[5],
            "Average Temperature  http://localhost:5001/graphs/temp_avg_c.png?t=42"
        );
    }
}
