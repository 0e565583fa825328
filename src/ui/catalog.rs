use eframe::egui::{self, RichText, Ui};

use insightboard::data::model::{format_date, DatasetRecord, NOT_APPLICABLE};

use crate::color::{status_color, type_color};
use crate::state::AppState;

const CARD_WIDTH: f32 = 280.0;

// ---------------------------------------------------------------------------
// Catalog page – card grid
// ---------------------------------------------------------------------------

pub fn catalog_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Catalog");
    ui.label(RichText::new("Browse every dataset by name, description or owner.").weak());
    ui.separator();

    if state.catalog_rows.is_empty() {
        ui.label(RichText::new("No datasets found matching your search.").weak());
        return;
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for &idx in &state.catalog_rows {
            dataset_card(ui, state.record(idx));
        }
    });
}

fn dataset_card(ui: &mut Ui, rec: &DatasetRecord) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        ui.set_min_height(150.0);
        ui.vertical(|ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new(rec.kind.as_str()).small().color(type_color(rec.kind)));
                ui.label(
                    RichText::new(rec.status.as_str())
                        .small()
                        .color(status_color(rec.status)),
                );
                if let Some(sensitivity) = &rec.sensitivity {
                    ui.label(RichText::new(sensitivity).small().weak());
                }
            });
            ui.label(RichText::new(&rec.name).strong().size(15.0));
            ui.add(
                egui::Label::new(
                    RichText::new(rec.description.as_deref().unwrap_or("No description.")).weak(),
                )
                .wrap(),
            );
            ui.add_space(4.0);
            ui.horizontal(|ui: &mut Ui| {
                ui.label(format!("{} records", rec.records));
                ui.separator();
                ui.label(format!(
                    "{} downloads",
                    rec.downloads.as_deref().unwrap_or(NOT_APPLICABLE)
                ));
            });
            ui.label(
                RichText::new(format!(
                    "{} · updated {}",
                    rec.owner.as_deref().unwrap_or(NOT_APPLICABLE),
                    rec.last_update
                        .as_deref()
                        .map_or_else(|| NOT_APPLICABLE.to_string(), format_date)
                ))
                .small()
                .weak(),
            );
        });
    });
}
