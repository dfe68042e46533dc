/// Chart layer: static per-chart specs and the plotters-based renderers.
pub mod bar;
pub mod histogram;
pub mod pie;

use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Shared styling (white background, light horizontal grid)
// ---------------------------------------------------------------------------

pub(crate) const GRID_GRAY: RGBColor = RGBColor(217, 217, 217);
pub(crate) const HISTOGRAM_BLUE: RGBColor = RGBColor(76, 114, 176);
pub(crate) const TEXT_GRAY: RGBColor = RGBColor(60, 60, 60);

// ---------------------------------------------------------------------------
// ChartSpec – static description of one chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Histogram,
    Pie,
}

/// Hardcoded configuration for one chart: source column, kind, labels,
/// pixel size, and output file name.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub column: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
    /// Second title line, rendered as a stacked title band.
    pub subtitle: Option<&'static str>,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
    pub size: (u32, u32),
    pub file_name: &'static str,
    pub rotate_x_labels: bool,
}

impl ChartSpec {
    pub const fn bar(
        column: &'static str,
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        size: (u32, u32),
        file_name: &'static str,
        rotate_x_labels: bool,
    ) -> Self {
        ChartSpec {
            column,
            kind: ChartKind::Bar,
            title,
            subtitle: None,
            x_label: Some(x_label),
            y_label: Some(y_label),
            size,
            file_name,
            rotate_x_labels,
        }
    }

    pub const fn histogram(
        column: &'static str,
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        size: (u32, u32),
        file_name: &'static str,
    ) -> Self {
        ChartSpec {
            column,
            kind: ChartKind::Histogram,
            title,
            subtitle: None,
            x_label: Some(x_label),
            y_label: Some(y_label),
            size,
            file_name,
            rotate_x_labels: false,
        }
    }

    pub const fn pie(
        column: &'static str,
        title: &'static str,
        size: (u32, u32),
        file_name: &'static str,
    ) -> Self {
        ChartSpec {
            column,
            kind: ChartKind::Pie,
            title,
            subtitle: None,
            x_label: None,
            y_label: None,
            size,
            file_name,
            rotate_x_labels: false,
        }
    }

    pub const fn with_subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }
}
