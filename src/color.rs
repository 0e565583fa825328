use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use insightboard::data::model::{DatasetStatus, DatasetType, Field};

// ---------------------------------------------------------------------------
// Fixed colours for closed enumerations
// ---------------------------------------------------------------------------

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Badge colour of a dataset status.
pub fn status_color(status: DatasetStatus) -> Color32 {
    match status {
        DatasetStatus::Active => Color32::from_rgb(0x22, 0xc5, 0x5e),
        DatasetStatus::Paused => Color32::from_rgb(0xea, 0xb3, 0x08),
        DatasetStatus::Archived => Color32::from_rgb(0x71, 0x71, 0x7a),
        DatasetStatus::Error => Color32::from_rgb(0xef, 0x44, 0x44),
    }
}

/// Icon / donut colour of a dataset type.
pub fn type_color(kind: DatasetType) -> Color32 {
    match kind {
        DatasetType::Stream => Color32::from_rgb(0x3b, 0x82, 0xf6),
        DatasetType::Database => Color32::from_rgb(0xec, 0x48, 0x99),
        DatasetType::File => Color32::from_rgb(0x14, 0xb8, 0xa6),
        DatasetType::Log => Color32::from_rgb(0xf9, 0x73, 0x16),
        DatasetType::Static => Color32::from_rgb(0xa8, 0x55, 0xf7),
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: field value → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of one field to colours for the breakdown chart.
/// Types and statuses keep their fixed colours; other fields get a palette.
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub field: Field,
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(field: Field, values: &[String]) -> Self {
        let palette = generate_palette(values.len());
        let mapping = values
            .iter()
            .zip(palette)
            .map(|(v, generated)| {
                let fixed = match field {
                    Field::Type => v.parse::<DatasetType>().ok().map(type_color),
                    Field::Status => v.parse::<DatasetStatus>().ok().map(status_color),
                    _ => None,
                };
                (v.clone(), fixed.unwrap_or(generated))
            })
            .collect();

        ColorMap {
            field,
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[2]);
    }

    #[test]
    fn types_keep_their_fixed_colours() {
        let values = vec!["Log".to_string(), "Stream".to_string()];
        let map = ColorMap::new(Field::Type, &values);
        assert_eq!(map.color_for("Log"), type_color(DatasetType::Log));
        assert_eq!(map.color_for("Stream"), type_color(DatasetType::Stream));
        assert_eq!(map.color_for("Lake"), Color32::GRAY);
    }

    #[test]
    fn free_text_fields_get_palette_colours() {
        let values = vec!["HR".to_string(), "Ops".to_string()];
        let map = ColorMap::new(Field::Owner, &values);
        let palette = generate_palette(2);
        assert_eq!(map.color_for("HR"), palette[0]);
        assert_eq!(map.color_for("Ops"), palette[1]);
    }
}
