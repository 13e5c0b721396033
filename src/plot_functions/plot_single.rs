// src/plot_functions/plot_single.rs

use log::info;
use ndarray::ArrayView2;
use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;
use plotters::style::colors::WHITE;
use std::error::Error;

use crate::constants::COLOR_SIGNAL_MAIN;
use crate::plot_framework::{
    draw_signal_panel, finite_min_max, signal_display_range, PlotStyle, RenderContext,
};

/// Renders one signal (row 0 of a one-row table) as a single panel.
///
/// The vertical range is the table's finite min/max padded by 1. `style`
/// selects the mark: `Some(Stem)` or `Some(Line)`; `None` draws no mark at
/// all while the title, grid, and range are still applied (the fallback for
/// an unrecognized selector, see [`PlotStyle::parse`]). Pass
/// [`crate::constants::DEFAULT_SIGNAL_TITLE`] for the stock title.
pub fn plot_single(
    ctx: &RenderContext,
    output_path: &str,
    signal: ArrayView2<f64>,
    title: &str,
    style: Option<PlotStyle>,
) -> Result<(), Box<dyn Error>> {
    let (sig_min, sig_max) =
        finite_min_max(signal.iter().copied()).ok_or("signal has no finite samples")?;
    let (y_min, y_max) = signal_display_range(sig_min, sig_max);
    let row = signal.row(0).to_vec();

    let root_area = BitMapBackend::new(output_path, ctx.dimensions()).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_signal_panel(
        &root_area,
        title,
        None,
        &row,
        y_min..y_max,
        style,
        COLOR_SIGNAL_MAIN,
    )?;
    root_area.present()?;
    info!("signal plot saved as '{output_path}'");
    Ok(())
}

// src/plot_functions/plot_single.rs
