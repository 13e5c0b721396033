// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod plot_framework;
pub mod plot_functions;

pub use plot_framework::{PanelOutcome, PlotStyle, RenderContext};
pub use plot_functions::plot_frequency_response::plot_frequency_response;
pub use plot_functions::plot_multiple::plot_multiple;
pub use plot_functions::plot_single::plot_single;
pub use plot_functions::plot_three_signals::plot_three_signals;
