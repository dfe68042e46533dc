use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::{ChartSpec, GRID_GRAY};
use crate::color::categorical_palette;

/// Render a bar chart of (category, count) pairs, one colour per category.
/// The caller decides the ordering; bars are drawn left to right as given.
pub fn render(path: &Path, spec: &ChartSpec, data: &[(String, usize)]) -> Result<()> {
    let root = BitMapBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = data.len() as u32;
    let max_count = data.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;
    let y_max = max_count + max_count / 10 + 1;
    let bottom_area = if spec.rotate_x_labels { 120 } else { 50 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            spec.title,
            FontDesc::new(FontFamily::SansSerif, 30.0, FontStyle::Bold),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_area)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;

    let x_label_font = if spec.rotate_x_labels {
        ("sans-serif", 14)
            .into_font()
            .transform(FontTransform::Rotate90)
    } else {
        ("sans-serif", 16).into_font()
    };
    let formatter = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(i) if (*i as usize) < data.len() => data[*i as usize].0.clone(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(GRID_GRAY)
        .light_line_style(WHITE)
        .x_desc(spec.x_label.unwrap_or(""))
        .y_desc(spec.y_label.unwrap_or(""))
        .x_label_formatter(&formatter)
        .x_labels(data.len())
        .label_style(("sans-serif", 18))
        .x_label_style(x_label_font)
        .draw()?;

    let palette = categorical_palette(data.len());
    chart.draw_series(data.iter().enumerate().map(|(i, (_, count))| {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i as u32), 0u32),
                (SegmentValue::Exact(i as u32 + 1), *count as u32),
            ],
            palette[i].mix(0.9).filled(),
        );
        rect.set_margin(0, 0, 8, 8);
        rect
    }))?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
