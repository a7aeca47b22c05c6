// src/data_analysis/mod.rs

pub mod accuracy;

// src/data_analysis/mod.rs
