// src/plot_functions/mod.rs

pub mod plot_frequency_response;
pub mod plot_multiple;
pub mod plot_single;
pub mod plot_three_signals;

// src/plot_functions/mod.rs
