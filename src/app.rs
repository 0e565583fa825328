use eframe::egui;

use crate::state::{AppState, Page};
use crate::ui::{catalog, dashboard, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct InsightBoardApp {
    pub state: AppState,
}

impl InsightBoardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for InsightBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + search ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(180.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.page {
                    Page::Dashboard => dashboard::dashboard_page(ui, &mut self.state),
                    Page::Datasets => table::datasets_page(ui, &mut self.state),
                    Page::Catalog => catalog::catalog_page(ui, &self.state),
                });
        });
    }
}
