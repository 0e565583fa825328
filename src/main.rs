mod app;
mod color;
mod state;
mod ui;

use app::InsightBoardApp;
use eframe::egui;
use insightboard::config::AppConfig;
use insightboard::data::{loader, mock};
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {e:#}");
        AppConfig::default()
    });

    let mut load_error = None;
    let catalog = match &config.catalog_path {
        Some(path) => match loader::load_file(path) {
            Ok(catalog) => {
                log::info!("Loaded {} datasets from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                load_error = Some(format!("Error: {e:#}"));
                mock::sample_catalog()
            }
        },
        None => {
            log::info!("No catalog configured, using the built-in sample");
            mock::sample_catalog()
        }
    };

    let mut state = AppState::new(config, catalog);
    state.status_message = load_error;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "InsightBoard",
        options,
        Box::new(move |_cc| Ok(Box::new(InsightBoardApp::new(state)))),
    )
}
