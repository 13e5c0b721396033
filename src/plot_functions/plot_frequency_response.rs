// src/plot_functions/plot_frequency_response.rs

use log::info;
use ndarray::{Array2, ArrayView1};
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::Color;
use std::error::Error;

use crate::constants::{
    COLOR_GAIN_CURVE, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FREQUENCY_X_LABEL, FREQUENCY_Y_LABEL, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT,
};
use crate::plot_framework::{calculate_range, finite_min_max, RenderContext};

/// Overwrites the first and last magnitude samples of column 0 with their
/// immediate neighbors, suppressing edge discontinuities in the rendered
/// curve. The assignments are sequential, so a two-row column ends with both
/// entries equal to the original second row. Tables shorter than two rows
/// are left untouched.
pub fn suppress_edge_discontinuities(x: &mut Array2<f64>) {
    let n = x.nrows();
    if n >= 2 {
        x[[0, 0]] = x[[1, 0]];
        x[[n - 1, 0]] = x[[n - 2, 0]];
    }
}

/// Magnitude in decibels: `20 * log10(|m|)`.
pub fn gain_db(magnitude: f64) -> f64 {
    20.0 * magnitude.abs().log10()
}

/// Renders a filter's gain curve in dB against normalized frequency.
///
/// `x` is a 2D magnitude table whose column 0 holds the response; `f` the
/// matching normalized frequencies in `[0, 0.5]`. The edge samples of `x`
/// are smoothed in place before the dB transform — a display-only edit of
/// the caller's buffer that callers must be aware of. Non-finite gain
/// points (a zero magnitude yields `-inf`) are dropped from the curve.
/// `label` adds a legend entry when present; pass
/// [`crate::constants::DEFAULT_FREQUENCY_TITLE`] for the stock title.
pub fn plot_frequency_response(
    ctx: &RenderContext,
    output_path: &str,
    x: &mut Array2<f64>,
    f: ArrayView1<f64>,
    title: &str,
    label: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    suppress_edge_discontinuities(x);

    let points: Vec<(f64, f64)> = f
        .iter()
        .copied()
        .zip(x.column(0).iter().copied())
        .map(|(freq, magnitude)| (freq, gain_db(magnitude)))
        .filter(|(freq, gain)| freq.is_finite() && gain.is_finite())
        .collect();
    if points.is_empty() {
        return Err("frequency response has no finite gain samples".into());
    }

    let (f_min, f_max) = finite_min_max(points.iter().map(|p| p.0))
        .ok_or("frequency axis has no finite values")?;
    if f_max <= f_min {
        return Err("frequency axis has no span".into());
    }
    let (gain_min, gain_max) = finite_min_max(points.iter().map(|p| p.1))
        .ok_or("gain curve has no finite values")?;
    let (y_min, y_max) = calculate_range(gain_min, gain_max);

    let root_area = BitMapBackend::new(output_path, ctx.dimensions()).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(f_min..f_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(FREQUENCY_X_LABEL)
        .y_desc(FREQUENCY_Y_LABEL)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let curve_color = *COLOR_GAIN_CURVE;
    let series = chart.draw_series(LineSeries::new(
        points,
        curve_color.stroke_width(LINE_WIDTH_PLOT),
    ))?;

    if let Some(legend_text) = label {
        series.label(legend_text).legend(move |(lx, ly)| {
            PathElement::new(
                vec![(lx, ly), (lx + 20, ly)],
                curve_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    root_area.present()?;
    info!("frequency response plot saved as '{output_path}'");
    Ok(())
}


// src/plot_functions/plot_frequency_response.rs
