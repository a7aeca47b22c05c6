// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod plot_framework;
pub mod plot_functions;

pub use data_analysis::accuracy::{compute_accuracy, summarize_accuracy, AccuracySummary};
pub use data_input::error::LoadError;
pub use data_input::log_data::SampleRow;
pub use data_input::log_parser::{parse_log_file, parse_log_reader};
pub use plot_functions::plot_steering_vs_actual::plot_steering_vs_actual;

/// Console line reporting the metric, e.g. `Percentage Correct: 87.50 %`.
pub fn format_percentage_line(percentage_correct: f64) -> String {
    format!("Percentage Correct: {:.2} %", percentage_correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_line_format() {
        assert_eq!(format_percentage_line(87.5), "Percentage Correct: 87.50 %");
        assert_eq!(format_percentage_line(100.0), "Percentage Correct: 100.00 %");
    }
}
