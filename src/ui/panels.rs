use eframe::egui::{self, Color32, RichText, Ui};

use insightboard::data::{loader, mock};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("InsightBoard").strong());
    });
    ui.separator();

    for page in Page::ALL {
        let selected = state.page == page;
        let label = RichText::new(page.label()).size(15.0);
        if ui
            .add_sized(
                [ui.available_width(), 28.0],
                egui::SelectableLabel::new(selected, label),
            )
            .clicked()
            && !selected
        {
            log::debug!("navigating to {}", page.label());
            state.page = page;
        }
    }

    ui.separator();
    ui.label(
        RichText::new(format!(
            "{} datasets, {} active",
            state.catalog.len(),
            state.catalog.active_count()
        ))
        .small()
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save as…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Load sample catalog").clicked() {
                log::info!("Loading the built-in sample catalog");
                state.set_catalog(mock::sample_catalog());
                ui.close_menu();
            }
        });

        ui.separator();

        let mut term = state.search_term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search datasets…")
                .desired_width(260.0),
        );
        if response.changed() {
            state.set_search_term(&term);
        }
        if !state.search_term.is_empty() && ui.small_button("✖").clicked() {
            state.set_search_term("");
        }

        ui.separator();

        let shown = match state.page {
            Page::Dashboard => state.dashboard_rows.len(),
            Page::Datasets => state.table_rows.len(),
            Page::Catalog => state.catalog_rows.len(),
        };
        ui.label(format!("{} datasets, {} shown", state.catalog.len(), shown));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(catalog) => {
                log::info!("Loaded {} datasets from {}", catalog.len(), path.display());
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save dataset catalog")
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .set_file_name("catalog.json")
        .save_file();

    if let Some(path) = file {
        match loader::save_file(&path, state.catalog.records()) {
            Ok(()) => log::info!("Saved {} datasets to {}", state.catalog.len(), path.display()),
            Err(e) => {
                log::error!("Failed to save file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
