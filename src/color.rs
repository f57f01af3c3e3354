use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Hex colours from the config
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (leading `#` optional) into a [`Color32`].
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex.trim()).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Colours used by the three charts.
#[derive(Debug, Clone, Copy)]
pub struct ChartPalette {
    pub gender_bars: Color32,
    pub change_line: Color32,
    pub total_bars: Color32,
    growth: Color32,
    decline: Color32,
}

impl ChartPalette {
    /// Build from hex strings, falling back to fixed colours on bad input.
    pub fn from_hex(gender_bars: &str, change_line: &str, total_bars: &str) -> Self {
        ChartPalette {
            gender_bars: parse_hex(gender_bars).unwrap_or(Color32::LIGHT_BLUE),
            change_line: parse_hex(change_line).unwrap_or(Color32::LIGHT_BLUE),
            total_bars: parse_hex(total_bars).unwrap_or(Color32::ORANGE),
            growth: hsl_to_color32(140.0, 0.6, 0.45),
            decline: hsl_to_color32(0.0, 0.75, 0.55),
        }
    }

    /// Marker colour for a percentage change point.
    pub fn trend_color(&self, change: f64) -> Color32 {
        if change < 0.0 {
            self.decline
        } else {
            self.growth
        }
    }
}
