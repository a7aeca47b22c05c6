// src/data_analysis/accuracy.rs

use crate::constants::{ACTIVE_ANGLE_EPSILON, RELATIVE_TOLERANCE};
use crate::data_input::log_data::SampleRow;

/// Row counts behind the Percentage Correct metric.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccuracySummary {
    pub total_rows: usize,
    pub active_rows: usize,
    pub correct_rows: usize,
}

impl AccuracySummary {
    /// Share of active rows that were correct, in percent.
    /// Returns exactly 0.0 when no row was active.
    pub fn percentage_correct(&self) -> f64 {
        if self.active_rows > 0 {
            (self.correct_rows as f64 / self.active_rows as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// A row takes part in the metric only when the actual angle is away from zero.
pub fn is_active(row: &SampleRow) -> bool {
    row.actual_angle.abs() > ACTIVE_ANGLE_EPSILON
}

/// Commanded angle is within the relative tolerance band around the actual angle.
pub fn is_correct(row: &SampleRow) -> bool {
    (row.commanded_angle - row.actual_angle).abs() <= RELATIVE_TOLERANCE * row.actual_angle.abs()
}

/// Counts total, active and correct rows over the full sequence.
pub fn summarize_accuracy(rows: &[SampleRow]) -> AccuracySummary {
    rows.iter()
        .filter(|row| is_active(row))
        .fold(
            AccuracySummary {
                total_rows: rows.len(),
                ..Default::default()
            },
            |mut summary, row| {
                summary.active_rows += 1;
                if is_correct(row) {
                    summary.correct_rows += 1;
                }
                summary
            },
        )
}

/// Percentage of active rows whose commanded angle lies within 25% of the actual angle.
pub fn compute_accuracy(rows: &[SampleRow]) -> f64 {
    summarize_accuracy(rows).percentage_correct()
}


// src/data_analysis/accuracy.rs
