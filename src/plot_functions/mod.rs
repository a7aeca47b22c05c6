// src/plot_functions/mod.rs

pub mod plot_steering_vs_actual;

// src/plot_functions/mod.rs
