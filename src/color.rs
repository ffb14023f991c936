use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
// Color mapping: tissue → Color32
// ---------------------------------------------------------------------------

/// Maps tissue values to distinct colours.
///
/// Built once from the full sorted tissue list, so a tissue keeps the same
/// colour no matter which subset of tissues is currently filtered in.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build the colour map from the fixed tissue ordering.
    pub fn new(ordered_values: &[String]) -> Self {
        let palette = generate_palette(ordered_values.len());
        let mapping: BTreeMap<String, Color32> = ordered_values
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given tissue.
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

    fn tissues(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn palette_has_requested_length_and_distinct_colors() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn color_is_stable_across_filter_subsets() {
        // The map is keyed by the full ordering, so filtering tissues out
        // never shifts the colour of the ones that remain.
        let full = ColorMap::new(&tissues(&["Blood", "Brain", "Liver"]));
        let blood = full.color_for("Blood");
        let liver = full.color_for("Liver");

        // Same map queried for any subset returns identical colours.
        assert_eq!(full.color_for("Blood"), blood);
        assert_eq!(full.color_for("Liver"), liver);
        assert_ne!(blood, liver);
    }

    #[test]
    fn unknown_value_falls_back_to_default() {
        let map = ColorMap::new(&tissues(&["Blood"]));
        assert_eq!(map.color_for("Kidney"), Color32::GRAY);
    }
}
