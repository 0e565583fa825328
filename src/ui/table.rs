use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use insightboard::data::model::{format_date, DatasetStatus, Field, NOT_APPLICABLE};

use crate::color::{status_color, type_color};
use crate::state::{AppState, Page};

/// Columns of the dataset tables, left to right.
const COLUMNS: [Field; 7] = [
    Field::Name,
    Field::Status,
    Field::Type,
    Field::Records,
    Field::Size,
    Field::LastUpdate,
    Field::Owner,
];

// ---------------------------------------------------------------------------
// Datasets page
// ---------------------------------------------------------------------------

pub fn datasets_page(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Datasets");
        ui.add_space(16.0);

        let current = state.table_view.status;
        let mut chosen = current;
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(current.map_or("All statuses", DatasetStatus::as_str))
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut chosen, None, "All statuses");
                for status in DatasetStatus::ALL {
                    ui.selectable_value(&mut chosen, Some(status), status.as_str());
                }
            });
        if chosen != current {
            state.set_status_filter(chosen);
        }
    });
    ui.separator();

    dataset_table(ui, state, Page::Datasets);
}

// ---------------------------------------------------------------------------
// Sortable dataset table
// ---------------------------------------------------------------------------

/// Render the rows of `page` as a table with sortable headers and a
/// per-row status menu.
pub fn dataset_table(ui: &mut Ui, state: &mut AppState, page: Page) {
    let (rows, sort) = match page {
        Page::Dashboard => (&state.dashboard_rows, state.dashboard_view.sort),
        Page::Datasets => (&state.table_rows, state.table_view.sort),
        Page::Catalog => (&state.catalog_rows, state.catalog_view.sort),
    };

    if rows.is_empty() {
        ui.label(RichText::new("No datasets found matching your search.").weak());
        return;
    }

    // Interactions are collected while `state` is borrowed and applied after.
    let mut clicked_header: Option<Field> = None;
    let mut status_change: Option<(String, DatasetStatus)> = None;

    ui.push_id(page.label(), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::remainder().at_least(180.0))
            .columns(Column::auto().at_least(80.0), COLUMNS.len() - 1)
            .header(22.0, |mut header| {
                for field in COLUMNS {
                    header.col(|ui: &mut Ui| {
                        let arrow = match (sort.key == field, sort.is_ascending()) {
                            (true, true) => " ▲",
                            (true, false) => " ▼",
                            (false, _) => "",
                        };
                        let text = RichText::new(format!("{}{arrow}", field.label())).strong();
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            clicked_header = Some(field);
                        }
                    });
                }
            })
            .body(|mut body| {
                for &idx in rows {
                    let rec = state.record(idx);
                    body.row(26.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new("●").color(type_color(rec.kind)));
                            ui.label(&rec.name);
                        });
                        row.col(|ui: &mut Ui| {
                            let badge = RichText::new(rec.status.as_str())
                                .color(status_color(rec.status));
                            ui.menu_button(badge, |ui: &mut Ui| {
                                for next in DatasetStatus::SELECTABLE {
                                    let button = egui::Button::new(format!("Set {next}"));
                                    if ui
                                        .add_enabled(rec.status.can_change_to(next), button)
                                        .clicked()
                                    {
                                        status_change = Some((rec.id.clone(), next));
                                        ui.close_menu();
                                    }
                                }
                            });
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(rec.kind.as_str()).color(type_color(rec.kind)));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.records);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(&rec.size);
                        });
                        row.col(|ui: &mut Ui| {
                            let text = rec
                                .last_update
                                .as_deref()
                                .map_or_else(|| NOT_APPLICABLE.to_string(), format_date);
                            ui.label(text);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(rec.owner.as_deref().unwrap_or(NOT_APPLICABLE));
                        });
                    });
                }
            });
    });

    if let Some(field) = clicked_header {
        state.sort_by(page, field);
    }
    if let Some((id, status)) = status_change {
        state.change_status(&id, status);
    }
}
