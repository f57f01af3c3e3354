use std::path::PathBuf;

use crate::color::ChartPalette;
use crate::data::model::Gender;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed settings of the dashboard. There are no runtime sources: the data
/// file path is resolved against the working directory.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV file loaded at start-up.
    pub data_path: PathBuf,
    pub title: String,
    pub subtitle: String,
    pub sidebar_header: String,
    /// Gender selected before the user touches the selector.
    pub default_gender: Gender,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub sidebar_width: f32,
    pub chart_height: f32,
    /// `#rrggbb` colours of the three charts.
    pub gender_bar_color: String,
    pub change_line_color: String,
    pub total_bar_color: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("arrivals_soe.csv"),
            title: "🌏 Malaysia Foreign Entries Dashboard".to_string(),
            subtitle: "Analyze foreign entries into Malaysia by various dimensions".to_string(),
            sidebar_header: "Filter Data Here:".to_string(),
            default_gender: Gender::Male,
            window_size: [1280.0, 900.0],
            min_window_size: [700.0, 500.0],
            sidebar_width: 240.0,
            chart_height: 260.0,
            gender_bar_color: "#1f77b4".to_string(),
            change_line_color: "#636efa".to_string(),
            total_bar_color: "#ff7f0e".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn palette(&self) -> ChartPalette {
        ChartPalette::from_hex(
            &self.gender_bar_color,
            &self.change_line_color,
            &self.total_bar_color,
        )
    }
}
