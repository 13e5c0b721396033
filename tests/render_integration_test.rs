// tests/render_integration_test.rs

use ndarray::{arr1, arr2, Array2};
use sigplot::constants::{
    DEFAULT_FREQUENCY_TITLE, DEFAULT_SIGNAL_TITLE, DEFAULT_TRIPTYCH_LABELS,
    DEFAULT_TRIPTYCH_TITLES,
};
use sigplot::plot_framework::signal_display_range;
use sigplot::{
    plot_frequency_response, plot_multiple, plot_single, plot_three_signals, PanelOutcome,
    PlotStyle, RenderContext,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scratch_path(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

fn assert_rendered(path: &str) {
    let meta = std::fs::metadata(path).expect("output image should exist");
    assert!(meta.len() > 0, "output image should not be empty");
}

#[test]
fn single_line_plot_end_to_end() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "single_line.png");

    let signal = arr2(&[[3.0, -1.0, 4.0, 1.0, 5.0]]);
    plot_single(
        &RenderContext::single(),
        &path,
        signal.view(),
        "Test",
        Some(PlotStyle::Line),
    )
    .unwrap();

    assert_rendered(&path);
    // y-limits for this row: (min - 1, max + 1)
    assert_eq!(signal_display_range(-1.0, 5.0), (-2.0, 6.0));
}

#[test]
fn single_plot_without_style_still_renders_frame() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "single_no_mark.png");

    // Unrecognized selectors parse to None; the call is a no-op for marks
    // but the titled, gridded frame is still produced.
    assert_eq!(PlotStyle::parse("bars"), None);
    let signal = arr2(&[[1.0, 2.0, 3.0]]);
    plot_single(
        &RenderContext::single(),
        &path,
        signal.view(),
        DEFAULT_SIGNAL_TITLE,
        None,
    )
    .unwrap();

    assert_rendered(&path);
}

#[test]
fn multiple_with_five_rows_pads_to_six_panels() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "decomposition_odd.png");

    let table = arr2(&[
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, -3.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 4.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 5.0],
    ]);
    let outcomes = plot_multiple(&RenderContext::decomposition(), &path, table.view()).unwrap();

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes[..5].iter().all(|o| o.is_rendered()));
    assert_eq!(outcomes[5], PanelOutcome::Padding);
    assert_rendered(&path);
}

#[test]
fn multiple_with_even_rows_has_no_padding_panel() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "decomposition_even.png");

    let table = arr2(&[[1.0, 0.0], [0.0, -1.0]]);
    let outcomes = plot_multiple(&RenderContext::decomposition(), &path, table.view()).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.is_rendered()));
    assert_rendered(&path);
}

#[test]
fn multiple_reports_malformed_row_without_aborting() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "decomposition_failed_row.png");

    let table = arr2(&[
        [1.0, 2.0, 3.0],
        [f64::NAN, f64::NAN, f64::NAN],
        [3.0, 2.0, 1.0],
    ]);
    let outcomes = plot_multiple(&RenderContext::decomposition(), &path, table.view()).unwrap();

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_rendered());
    assert!(matches!(outcomes[1], PanelOutcome::Failed(_)));
    assert!(outcomes[2].is_rendered());
    assert_eq!(outcomes[3], PanelOutcome::Padding);
    assert_rendered(&path);
}

#[test]
fn multiple_with_no_finite_samples_is_an_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "decomposition_all_nan.png");

    let table = Array2::<f64>::from_elem((2, 3), f64::NAN);
    assert!(plot_multiple(&RenderContext::decomposition(), &path, table.view()).is_err());
}

#[test]
fn three_signals_renders_with_default_titles() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "triptych.png");

    let x1 = arr1(&[0.0, 1.0, 0.0, -1.0, 0.0]);
    let x2 = arr1(&[1.0, 1.0, 1.0, 1.0, 1.0]);
    let x3 = arr1(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
    plot_three_signals(
        &RenderContext::triptych(),
        &path,
        x1.view(),
        x2.view(),
        x3.view(),
        &DEFAULT_TRIPTYCH_TITLES,
        &DEFAULT_TRIPTYCH_LABELS,
    )
    .unwrap();

    assert_rendered(&path);
}

#[test]
fn frequency_response_smooths_the_caller_buffer() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir, "frequency_response.png");

    let mut x = arr2(&[[9.0], [1.0], [2.0], [3.0], [7.0]]);
    let f = arr1(&[0.0, 0.125, 0.25, 0.375, 0.5]);
    plot_frequency_response(
        &RenderContext::frequency_response(),
        &path,
        &mut x,
        f.view(),
        DEFAULT_FREQUENCY_TITLE,
        Some("elliptic, order 4"),
    )
    .unwrap();

    // The edge samples were clamped to their neighbors before the dB
    // transform, as a documented side effect on the caller's buffer.
    assert_eq!(x[[0, 0]], 1.0);
    assert_eq!(x[[4, 0]], 3.0);
    assert_rendered(&path);
}
