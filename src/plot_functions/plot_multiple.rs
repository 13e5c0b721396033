// src/plot_functions/plot_multiple.rs

use log::{info, warn};
use ndarray::ArrayView2;
use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;
use plotters::style::colors::WHITE;
use std::error::Error;

use crate::constants::COLOR_SIGNAL_MAIN;
use crate::plot_framework::{
    draw_panel_message, draw_signal_panel, finite_min_max, padded_panel_count,
    signal_display_range, PanelOutcome, PlotStyle, RenderContext,
};

/// Renders an impulse/step decomposition table as a two-column grid of stem
/// panels, one row per panel, titled "Sample: i".
///
/// All panels share one vertical range, `(min(table) - 1, max(table) + 1)`,
/// so they stay visually comparable. An odd row count is padded to an even
/// panel count; the padding slot is left blank. Rendering is best-effort:
/// a panel that fails to draw (e.g. a row with non-finite samples) gets a
/// failure notice and is reported in the returned outcome list, while the
/// remaining panels still render.
pub fn plot_multiple(
    ctx: &RenderContext,
    output_path: &str,
    signal: ArrayView2<f64>,
) -> Result<Vec<PanelOutcome>, Box<dyn Error>> {
    let rows = signal.nrows();
    if rows == 0 {
        return Err("decomposition table has no rows".into());
    }
    let (table_min, table_max) = finite_min_max(signal.iter().copied())
        .ok_or("decomposition table has no finite samples")?;
    let (y_min, y_max) = signal_display_range(table_min, table_max);

    let panel_count = padded_panel_count(rows);
    let root_area = BitMapBackend::new(output_path, ctx.dimensions()).into_drawing_area();
    root_area.fill(&WHITE)?;
    let sub_plot_areas = root_area.split_evenly((panel_count / 2, 2));

    let mut outcomes = Vec::with_capacity(panel_count);
    for (i, area) in sub_plot_areas.iter().enumerate() {
        if i >= rows {
            outcomes.push(PanelOutcome::Padding);
            continue;
        }
        let row = signal.row(i).to_vec();
        match draw_signal_panel(
            area,
            &format!("Sample: {i}"),
            None,
            &row,
            y_min..y_max,
            Some(PlotStyle::Stem),
            COLOR_SIGNAL_MAIN,
        ) {
            Ok(()) => outcomes.push(PanelOutcome::Rendered),
            Err(e) => {
                let reason = e.to_string();
                warn!("decomposition panel {i} failed: {reason}");
                // Failure notice is itself best-effort.
                let _ = draw_panel_message(area, i, &reason);
                outcomes.push(PanelOutcome::Failed(reason));
            }
        }
    }

    root_area.present()?;
    info!("decomposition plot saved as '{output_path}'");
    Ok(outcomes)
}

// src/plot_functions/plot_multiple.rs
