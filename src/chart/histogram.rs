use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::{ChartSpec, GRID_GRAY, HISTOGRAM_BLUE};

/// Render a histogram of (bin label, count) pairs in axis order.
/// Bars are contiguous and share one fill colour.
pub fn render(path: &Path, spec: &ChartSpec, bins: &[(String, usize)]) -> Result<()> {
    let root = BitMapBackend::new(path, spec.size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = bins.len() as u32;
    let max_count = bins.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;
    let y_max = max_count + max_count / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            spec.title,
            FontDesc::new(FontFamily::SansSerif, 30.0, FontStyle::Bold),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;

    let formatter = |x: &SegmentValue<u32>| match x {
        SegmentValue::CenterOf(i) if (*i as usize) < bins.len() => bins[*i as usize].0.clone(),
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
        .x_labels(bins.len())
        .label_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(HISTOGRAM_BLUE.mix(0.85).filled())
            .margin(1)
            .data(
                bins.iter()
                    .enumerate()
                    .map(|(i, (_, count))| (i as u32, *count as u32)),
            ),
    )?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
