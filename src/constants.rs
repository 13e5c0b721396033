// src/constants.rs

use plotters::style::colors::full_palette::{ORANGE, TEAL};
use plotters::style::RGBColor;

// Figure dimensions per operation, in pixels. These reproduce the original
// per-call figure sizes (inches at 100 px/in); the frequency-response figure
// keeps the backend default.
pub const FIG_DECOMPOSITION: (u32, u32) = (1500, 2500);
pub const FIG_SINGLE: (u32, u32) = (1000, 500);
pub const FIG_TRIPTYCH: (u32, u32) = (2500, 1000);
pub const FIG_FREQUENCY_RESPONSE: (u32, u32) = (640, 480);

// Fixed vertical padding applied above and below the signal extrema.
pub const Y_RANGE_PAD: f64 = 1.0;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 16;

// Stroke widths for lines.
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius for stem heads.
pub const STEM_MARKER_RADIUS: i32 = 3;

// --- Plot Color Assignments ---
pub const COLOR_SIGNAL_MAIN: RGBColor = RGBColor(31, 119, 180);
pub const COLOR_GAIN_CURVE: &RGBColor = &TEAL;
pub const COLOR_TRIPTYCH_ACCENT: &RGBColor = &ORANGE;

// --- Default titles and axis labels ---
pub const DEFAULT_SIGNAL_TITLE: &str = "Signal";
pub const DEFAULT_FREQUENCY_TITLE: &str = "Frequency Response of Filter";
pub const DEFAULT_TRIPTYCH_TITLES: [&str; 3] = ["x1", "x2", "x3"];
pub const DEFAULT_TRIPTYCH_LABELS: [&str; 3] = ["sample", "sample", "sample"];
pub const FREQUENCY_X_LABEL: &str = "Normalized frequency";
pub const FREQUENCY_Y_LABEL: &str = "Gain [dB]";

// Layout paddings for the triptych figure, in pixels.
pub const TRIPTYCH_OUTER_MARGIN: u32 = 10;
pub const TRIPTYCH_PANEL_GAP: u32 = 30;

// src/constants.rs
