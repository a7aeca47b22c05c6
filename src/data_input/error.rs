// src/data_input/error.rs

use std::path::PathBuf;

/// Errors raised while loading the steering log. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected 3 fields (timestamp, steeringWheelAngle, actual_steering), found {found}")]
    FieldCount { row: u64, found: usize },

    #[error("Row {row}: could not parse {column} value '{value}'")]
    InvalidField {
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: timestamp {micros} us is outside the representable date range")]
    TimestampOutOfRange { row: u64, micros: i64 },

    #[error("No data rows found in {path:?}")]
    Empty { path: PathBuf },
}

// src/data_input/error.rs
