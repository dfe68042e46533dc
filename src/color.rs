use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;
use rand::seq::SliceRandom;

// ---------------------------------------------------------------------------
// Color palette generators
// ---------------------------------------------------------------------------

fn hue_spaced(n: usize, saturation: f32, lightness: f32) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, saturation, lightness);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for per-category bar colouring.
pub fn categorical_palette(n: usize) -> Vec<RGBColor> {
    hue_spaced(n, 0.75, 0.55)
}

/// Soft pastel variant of the categorical palette, for pie slices.
pub fn pastel_palette(n: usize) -> Vec<RGBColor> {
    hue_spaced(n, 0.65, 0.78)
}

/// The pastel palette in a random order. Built once per run and shared by
/// every pie chart; only the colour assignment varies, never the data.
pub fn shuffled_pastel_palette(n: usize) -> Vec<RGBColor> {
    let mut colors = pastel_palette(n);
    colors.shuffle(&mut rand::rng());
    colors
}
