mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // Load once before the window opens; a bad file aborts start-up.
    let dataset = data::loader::load_cached(&config.data_path)
        .map_err(|e| {
            log::error!("Failed to load {}: {e}", config.data_path.display());
            e
        })
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has no data rows", config.data_path.display());
    }
    log::info!(
        "Loaded {} records: {} years, {} months, {} states",
        dataset.len(),
        dataset.years.len(),
        dataset.months.len(),
        dataset.states.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
