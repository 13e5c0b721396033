// src/plot_functions/plot_three_signals.rs

use log::info;
use ndarray::ArrayView1;
use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::style::colors::WHITE;
use plotters::style::RGBColor;
use std::error::Error;

use crate::constants::{
    COLOR_SIGNAL_MAIN, COLOR_TRIPTYCH_ACCENT, TRIPTYCH_OUTER_MARGIN, TRIPTYCH_PANEL_GAP,
};
use crate::plot_framework::{
    calculate_range, draw_signal_panel, finite_min_max, PlotStyle, RenderContext,
};

/// Renders three independent signals in one figure: two panels side by side
/// on top (`x1`, `x2`) and one wide panel spanning both columns on the
/// bottom (`x3`).
///
/// Titles and x-axis labels are matched positionally; pass
/// [`crate::constants::DEFAULT_TRIPTYCH_TITLES`] /
/// [`crate::constants::DEFAULT_TRIPTYCH_LABELS`] for the stock values. Each
/// panel autoscales its own vertical range. This call finalizes the figure.
pub fn plot_three_signals(
    ctx: &RenderContext,
    output_path: &str,
    x1: ArrayView1<f64>,
    x2: ArrayView1<f64>,
    x3: ArrayView1<f64>,
    titles: &[&str; 3],
    labels: &[&str; 3],
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, ctx.dimensions()).into_drawing_area();
    root_area.fill(&WHITE)?;

    let padded = root_area.margin(
        TRIPTYCH_OUTER_MARGIN,
        TRIPTYCH_OUTER_MARGIN,
        TRIPTYCH_OUTER_MARGIN,
        TRIPTYCH_OUTER_MARGIN,
    );
    let (_, inner_height) = padded.dim_in_pixel();
    let (top_area, bottom_area) = padded.split_vertically(inner_height / 2);
    let top_panels = top_area.split_evenly((1, 2));

    let draw_line_panel = |area: &DrawingArea<BitMapBackend, Shift>,
                           signal: ArrayView1<f64>,
                           title: &str,
                           x_label: &str,
                           color: RGBColor|
     -> Result<(), Box<dyn Error>> {
        let samples = signal.to_vec();
        let (sig_min, sig_max) =
            finite_min_max(samples.iter().copied()).ok_or("signal has no finite samples")?;
        let (y_min, y_max) = calculate_range(sig_min, sig_max);
        // Inner gap keeps the panel labels from running into each other.
        let panel = area.margin(
            TRIPTYCH_PANEL_GAP,
            TRIPTYCH_PANEL_GAP,
            TRIPTYCH_PANEL_GAP,
            TRIPTYCH_PANEL_GAP,
        );
        draw_signal_panel(
            &panel,
            title,
            Some(x_label),
            &samples,
            y_min..y_max,
            Some(PlotStyle::Line),
            color,
        )
    };

    draw_line_panel(&top_panels[0], x1, titles[0], labels[0], COLOR_SIGNAL_MAIN)?;
    draw_line_panel(&top_panels[1], x2, titles[1], labels[1], COLOR_SIGNAL_MAIN)?;
    draw_line_panel(&bottom_area, x3, titles[2], labels[2], *COLOR_TRIPTYCH_ACCENT)?;

    root_area.present()?;
    info!("three-signal plot saved as '{output_path}'");
    Ok(())
}

// src/plot_functions/plot_three_signals.rs
