use std::sync::Arc;

use eframe::egui;

use crate::color::ChartPalette;
use crate::config::DashboardConfig;
use crate::data::model::ArrivalsDataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    config: DashboardConfig,
    palette: ChartPalette,
}

impl DashboardApp {
    pub fn new(dataset: Arc<ArrivalsDataset>, config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config.default_gender),
            palette: config.palette(),
            config,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state, &self.config);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(self.config.sidebar_width)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.config.sidebar_header);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &self.state, &self.palette, self.config.chart_height);
        });
    }
}
