// src/main.rs

use std::error::Error;
use std::path::Path;

use steering_accuracy_plot::constants::{INPUT_FILE_PATH, OUTPUT_FILE_PATH};
use steering_accuracy_plot::{
    format_percentage_line, parse_log_file, plot_steering_vs_actual, summarize_accuracy,
};

fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    // --- Load ---
    let input_path = Path::new(INPUT_FILE_PATH);
    let log_data = parse_log_file(input_path)?;

    // --- Accuracy ---
    let summary = summarize_accuracy(&log_data);
    log::info!(
        "Rows: {} total, {} active, {} correct",
        summary.total_rows,
        summary.active_rows,
        summary.correct_rows
    );
    if summary.active_rows == 0 {
        log::warn!("No active rows (|actual_steering| above threshold); reporting 0%.");
    }
    let percentage_correct = summary.percentage_correct();
    println!("{}", format_percentage_line(percentage_correct));

    // --- Chart ---
    // Saved only; the framework logs the written path.
    plot_steering_vs_actual(&log_data, percentage_correct, Path::new(OUTPUT_FILE_PATH))?;

    Ok(())
}

// src/main.rs
