use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ChartSpec, TEXT_GRAY};

/// Render a pie chart of (category, count) slices with percentage labels.
///
/// Slices are drawn clockwise from twelve o'clock in the order given,
/// coloured by cycling the shared palette. An all-zero total draws an empty
/// chart rather than failing.
pub fn render(
    path: &Path,
    spec: &ChartSpec,
    slices: &[(String, usize)],
    palette: &[RGBColor],
) -> Result<()> {
    let root = BitMapBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let title_font = FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Bold).color(&TEXT_GRAY);
    let mut area = root.titled(spec.title, title_font.clone())?;
    if let Some(second_line) = spec.subtitle {
        area = area.titled(second_line, title_font)?;
    }

    let total: usize = slices.iter().map(|(_, count)| count).sum();
    if total > 0 && !palette.is_empty() {
        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.36;

        let percent_font = ("sans-serif", 18)
            .into_font()
            .color(&TEXT_GRAY)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let label_font = ("sans-serif", 18)
            .into_font()
            .color(&TEXT_GRAY)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let mut start_angle = -PI / 2.0;
        for (i, (label, count)) in slices.iter().enumerate() {
            let fraction = *count as f64 / total as f64;
            let sweep = fraction * 2.0 * PI;
            let color = palette[i % palette.len()];

            // Slice as a polygon fan around the centre.
            let steps = ((sweep * 60.0).ceil() as usize).max(2);
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for step in 0..=steps {
                let angle = start_angle + sweep * step as f64 / steps as f64;
                points.push((
                    center.0 + (radius * angle.cos()) as i32,
                    center.1 + (radius * angle.sin()) as i32,
                ));
            }
            area.draw(&Polygon::new(points.clone(), color.filled()))?;
            area.draw(&Polygon::new(points, color.stroke_width(1)))?;

            let mid = start_angle + sweep / 2.0;
            area.draw(&Text::new(
                format!("{:.1}%", fraction * 100.0),
                (
                    center.0 + (radius * 0.6 * mid.cos()) as i32,
                    center.1 + (radius * 0.6 * mid.sin()) as i32,
                ),
                percent_font.clone(),
            ))?;
            area.draw(&Text::new(
                label.clone(),
                (
                    center.0 + (radius * 1.18 * mid.cos()) as i32,
                    center.1 + (radius * 1.18 * mid.sin()) as i32,
                ),
                label_font.clone(),
            ))?;

            start_angle += sweep;
        }
    }

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
