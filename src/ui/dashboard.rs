use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use insightboard::data::kpi::{axis_labels, chart_series, KpiKey, TimeRange};
use insightboard::data::model::Field;

use crate::color::{rgb, ColorMap};
use crate::state::{AppState, Page};
use crate::ui::table;

/// Fields offered by the breakdown selector.
const BREAKDOWN_FIELDS: [Field; 4] = [Field::Type, Field::Status, Field::Sensitivity, Field::Owner];

const POSITIVE: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const NEGATIVE: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

pub fn dashboard_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dashboard");
    ui.add_space(8.0);

    kpi_row(ui, state);
    ui.add_space(12.0);

    main_chart(ui, state);
    ui.add_space(12.0);

    ui.columns(2, |cols: &mut [Ui]| {
        breakdown_panel(&mut cols[0], state);
        trending_panel(&mut cols[1], state);
    });
    ui.add_space(12.0);

    ui.strong("Recent datasets");
    table::dataset_table(ui, state, Page::Dashboard);
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, state: &mut AppState) {
    let mut selected: Option<KpiKey> = None;

    ui.columns(state.kpis.len().max(1), |cols: &mut [Ui]| {
        for (ui, card) in cols.iter_mut().zip(&state.kpis) {
            let accent = rgb(card.color);
            let stroke = if card.key == state.active_kpi {
                Stroke::new(2.0, accent)
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke
            };

            let response = egui::Frame::group(ui.style())
                .stroke(stroke)
                .show(ui, |ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&card.title).color(accent));
                    ui.heading(RichText::new(&card.value).strong());
                    let change_color = if card.positive { POSITIVE } else { NEGATIVE };
                    ui.label(RichText::new(&card.change).small().color(change_color));
                })
                .response
                .interact(Sense::click())
                .on_hover_text(card.key.chart_description());

            if response.clicked() {
                selected = Some(card.key);
            }
        }
    });

    if let Some(key) = selected {
        log::debug!("charting {key:?}");
        state.active_kpi = key;
    }
}

// ---------------------------------------------------------------------------
// Main chart
// ---------------------------------------------------------------------------

fn main_chart(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong(state.active_kpi.chart_title());
            ui.label(RichText::new(state.active_kpi.chart_description()).weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            // Reversed so the buttons read Day, Week, Month.
            for range in TimeRange::ALL.into_iter().rev() {
                ui.selectable_value(&mut state.time_range, range, range.as_str());
            }
        });
    });

    let series = chart_series(state.active_kpi, state.time_range);
    let len = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let labels: Vec<String> = axis_labels(state.time_range, len)
        .into_iter()
        .map(str::to_string)
        .collect();

    Plot::new("main_chart")
        .legend(Legend::default())
        .height(260.0)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for s in &series {
                let points: PlotPoints = s
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();
                let line = Line::new(points).name(&s.label).color(rgb(s.color)).width(2.0);
                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Breakdown donut
// ---------------------------------------------------------------------------

fn breakdown_panel(ui: &mut Ui, state: &mut AppState) {
    let current = state.breakdown_field;
    let mut chosen = current;

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Breakdown by");
        egui::ComboBox::from_id_salt("breakdown_field")
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for field in BREAKDOWN_FIELDS {
                    ui.selectable_value(&mut chosen, field, field.label());
                }
            });
    });
    if chosen != current {
        state.set_breakdown_field(chosen);
    }

    let slices = state.catalog.breakdown(state.breakdown_field);
    ui.horizontal(|ui: &mut Ui| {
        donut(ui, &slices, &state.color_map, 180.0);
        ui.vertical(|ui: &mut Ui| {
            for (value, count) in &slices {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(state.color_map.color_for(value)));
                    ui.label(format!("{value}  ({count})"));
                });
            }
        });
    });
}

/// Ring chart drawn as thick arc strokes, one per slice.
fn donut(ui: &mut Ui, slices: &[(String, usize)], colors: &ColorMap, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let thickness = size * 0.18;
    let radius = size * 0.5 - thickness * 0.5 - 2.0;

    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        painter.circle_stroke(center, radius, Stroke::new(thickness, Color32::DARK_GRAY));
        return;
    }

    let mut start = -FRAC_PI_2;
    for (value, count) in slices {
        let sweep = TAU * (*count as f32 / total as f32);
        let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let angle = start + sweep * i as f32 / steps as f32;
                center + radius * egui::vec2(angle.cos(), angle.sin())
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(thickness, colors.color_for(value))));
        start += sweep;
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        total.to_string(),
        FontId::proportional(22.0),
        ui.visuals().strong_text_color(),
    );
}

// ---------------------------------------------------------------------------
// Trending list
// ---------------------------------------------------------------------------

fn trending_panel(ui: &mut Ui, state: &AppState) {
    ui.strong("Trending datasets");
    if state.trending_rows.is_empty() {
        ui.label(RichText::new("Nothing trending right now.").weak());
        return;
    }

    egui::Grid::new("trending_grid")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (rank, &idx) in state.trending_rows.iter().enumerate() {
                let rec = state.record(idx);
                ui.label(RichText::new(format!("{}.", rank + 1)).weak());
                ui.label(&rec.name);
                ui.label(RichText::new(&rec.trend).color(POSITIVE));
                ui.end_row();
            }
        });
}
