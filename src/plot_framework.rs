// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FIG_DECOMPOSITION, FIG_FREQUENCY_RESPONSE, FIG_SINGLE, FIG_TRIPTYCH, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_PLOT, STEM_MARKER_RADIUS, Y_RANGE_PAD,
};

/// Figure-level configuration for one rendering call.
///
/// Replaces the "current figure size" process-global of a stateful plotting
/// surface: every call receives its dimensions explicitly, so sequential
/// calls cannot interfere with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
}

impl RenderContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Tall two-column grid for impulse/step decompositions.
    pub fn decomposition() -> Self {
        Self::new(FIG_DECOMPOSITION.0, FIG_DECOMPOSITION.1)
    }

    /// Wide single panel.
    pub fn single() -> Self {
        Self::new(FIG_SINGLE.0, FIG_SINGLE.1)
    }

    /// Extra-wide three-panel comparison figure.
    pub fn triptych() -> Self {
        Self::new(FIG_TRIPTYCH.0, FIG_TRIPTYCH.1)
    }

    pub fn frequency_response() -> Self {
        Self::new(FIG_FREQUENCY_RESPONSE.0, FIG_FREQUENCY_RESPONSE.1)
    }

    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Mark style for a signal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStyle {
    /// Discrete marker with a vertical line from the baseline to each sample.
    Stem,
    /// Continuous polyline through the samples.
    Line,
}

impl PlotStyle {
    /// Parses a style selector. Unknown selectors map to `None`: the panel
    /// is still laid out, titled, and gridded, but no mark is drawn.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stem" => Some(Self::Stem),
            "line" => Some(Self::Line),
            _ => None,
        }
    }
}

/// Per-panel result of a best-effort multi-panel rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    Rendered,
    /// Unfilled slot that pads an odd row count to a full two-column grid.
    Padding,
    Failed(String),
}

impl PanelOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, PanelOutcome::Rendered)
    }
}

/// Display range for signal plots: a fixed pad of 1 above and below the
/// extrema, so every decomposition panel shares comparable limits.
pub fn signal_display_range(min_val: f64, max_val: f64) -> (f64, f64) {
    (min_val - Y_RANGE_PAD, max_val + Y_RANGE_PAD)
}

/// Autoscale range with proportional padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Panel count for a decomposition grid: the row count rounded up to the
/// next even number, so the two-column layout has no missing slot.
pub fn padded_panel_count(rows: usize) -> usize {
    rows + rows % 2
}

/// Min/max over the finite values of an iterator. `None` when no value is
/// finite.
pub fn finite_min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
            seen = true;
        }
    }
    if seen {
        Some((min, max))
    } else {
        None
    }
}

/// Draws one signal panel: titled chart, background grid, fixed y-range,
/// and the requested mark style. `style == None` draws no mark at all.
pub(crate) fn draw_signal_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    x_label: Option<&str>,
    samples: &[f64],
    y_range: Range<f64>,
    style: Option<PlotStyle>,
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    if samples.is_empty() {
        return Err("empty signal".into());
    }
    if samples.iter().any(|v| !v.is_finite()) {
        return Err("non-finite sample in signal".into());
    }

    let x_range = -0.5..(samples.len() as f64 - 0.5);
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(10)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL));
    if let Some(label) = x_label {
        mesh.x_desc(label);
    }
    mesh.draw()?;

    match style {
        Some(PlotStyle::Stem) => {
            for (i, &v) in samples.iter().enumerate() {
                chart.draw_series(LineSeries::new(
                    vec![(i as f64, 0.0), (i as f64, v)],
                    color.stroke_width(LINE_WIDTH_PLOT),
                ))?;
            }
            chart.draw_series(samples.iter().enumerate().map(|(i, &v)| {
                Circle::new((i as f64, v), STEM_MARKER_RADIUS, color.filled())
            }))?;
        }
        Some(PlotStyle::Line) => {
            chart.draw_series(LineSeries::new(
                samples.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                color.stroke_width(LINE_WIDTH_PLOT),
            ))?;
        }
        None => {}
    }

    Ok(())
}

/// Writes a failure notice into an otherwise blank panel.
pub(crate) fn draw_panel_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_index: usize,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(
        format!("Panel {panel_index} unavailable:\n{reason}"),
        (width as i32 / 2 - 100, height as i32 / 2 - 10),
        text_style,
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_display_range_pads_by_one() {
        assert_eq!(signal_display_range(-1.0, 5.0), (-2.0, 6.0));
        assert_eq!(signal_display_range(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(signal_display_range(-3.5, -2.5), (-4.5, -1.5));
    }

    #[test]
    fn calculate_range_pads_proportionally() {
        let (min, max) = calculate_range(0.0, 100.0);
        assert_eq!(min, -15.0);
        assert_eq!(max, 115.0);
    }

    #[test]
    fn calculate_range_handles_degenerate_span() {
        let (min, max) = calculate_range(2.0, 2.0);
        assert_eq!(min, 1.5);
        assert_eq!(max, 2.5);
    }

    #[test]
    fn padded_panel_count_rounds_odd_up_to_even() {
        assert_eq!(padded_panel_count(0), 0);
        assert_eq!(padded_panel_count(1), 2);
        assert_eq!(padded_panel_count(4), 4);
        assert_eq!(padded_panel_count(5), 6);
        assert_eq!(padded_panel_count(8), 8);
    }

    #[test]
    fn plot_style_parse_known_selectors() {
        assert_eq!(PlotStyle::parse("stem"), Some(PlotStyle::Stem));
        assert_eq!(PlotStyle::parse("line"), Some(PlotStyle::Line));
    }

    #[test]
    fn plot_style_parse_unknown_is_none() {
        assert_eq!(PlotStyle::parse("scatter"), None);
        assert_eq!(PlotStyle::parse(""), None);
        assert_eq!(PlotStyle::parse("Stem"), None);
    }

    #[test]
    fn finite_min_max_skips_non_finite() {
        let values = [f64::NAN, 3.0, -1.0, f64::INFINITY, 4.0];
        assert_eq!(finite_min_max(values.iter().copied()), Some((-1.0, 4.0)));
    }

    #[test]
    fn finite_min_max_empty_or_all_nan_is_none() {
        assert_eq!(finite_min_max(std::iter::empty()), None);
        assert_eq!(finite_min_max([f64::NAN, f64::NAN].iter().copied()), None);
    }

    #[test]
    fn render_context_constructors_match_figure_constants() {
        assert_eq!(RenderContext::decomposition().dimensions(), (1500, 2500));
        assert_eq!(RenderContext::single().dimensions(), (1000, 500));
        assert_eq!(RenderContext::triptych().dimensions(), (2500, 1000));
        assert_eq!(RenderContext::frequency_response().dimensions(), (640, 480));
    }
}

// src/plot_framework.rs
