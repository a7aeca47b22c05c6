// src/plot_functions/plot_steering_vs_actual.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_ACTUAL_STEERING, COLOR_STEERING_WHEEL_ANGLE, LABEL_ACTUAL_STEERING,
    LABEL_STEERING_WHEEL_ANGLE, LINE_WIDTH_PLOT, PLOT_MAIN_TITLE, X_AXIS_LABEL,
    X_RANGE_MIN_PADDING_US, X_RANGE_PADDING_FRACTION, Y_AXIS_LABEL,
};
use crate::data_input::log_data::SampleRow;
use crate::plot_framework::{calculate_range, draw_time_series_plot, PlotConfig, PlotSeries};

/// Chart caption carrying the accuracy metric.
pub fn accuracy_caption(percentage_correct: f64) -> String {
    format!("Percentage Correct: {:.2}%", percentage_correct)
}

/// Builds the Steering Wheel Angle vs Actual Steering chart (blue, orange).
///
/// Points keep file order. Returns `None` when no row has a finite value to draw.
pub fn build_steering_plot_config(log_data: &[SampleRow], percentage_correct: f64) -> Option<PlotConfig> {
    if log_data.is_empty() {
        return None;
    }

    let mut commanded_series_data: Vec<(f64, f64)> = Vec::with_capacity(log_data.len());
    let mut actual_series_data: Vec<(f64, f64)> = Vec::with_capacity(log_data.len());

    let mut time_min = f64::INFINITY;
    let mut time_max = f64::NEG_INFINITY;
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;

    for row in log_data {
        let time = row.timestamp_us as f64;
        time_min = time_min.min(time);
        time_max = time_max.max(time);

        for value in [row.commanded_angle, row.actual_angle] {
            if value.is_finite() {
                val_min = val_min.min(value);
                val_max = val_max.max(value);
            }
        }
        commanded_series_data.push((time, row.commanded_angle));
        actual_series_data.push((time, row.actual_angle));
    }

    if !val_min.is_finite() || !val_max.is_finite() {
        return None;
    }

    let x_range = if time_max > time_min {
        let x_padding = (time_max - time_min) * X_RANGE_PADDING_FRACTION;
        (time_min - x_padding)..(time_max + x_padding)
    } else {
        (time_min - X_RANGE_MIN_PADDING_US)..(time_max + X_RANGE_MIN_PADDING_US)
    };
    let (final_value_min, final_value_max) = calculate_range(val_min, val_max);

    Some(PlotConfig {
        title: accuracy_caption(percentage_correct),
        x_range,
        y_range: final_value_min..final_value_max,
        series: vec![
            PlotSeries {
                data: commanded_series_data,
                label: LABEL_STEERING_WHEEL_ANGLE.to_string(),
                color: COLOR_STEERING_WHEEL_ANGLE,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: actual_series_data,
                label: LABEL_ACTUAL_STEERING.to_string(),
                color: COLOR_ACTUAL_STEERING,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ],
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
    })
}

/// Renders the steering chart and writes it to `output_path` as PNG.
pub fn plot_steering_vs_actual(
    log_data: &[SampleRow],
    percentage_correct: f64,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let plot_config = build_steering_plot_config(log_data, percentage_correct);
    draw_time_series_plot(
        output_path,
        PLOT_MAIN_TITLE,
        "Steering",
        plot_config.as_ref(),
    )
}


// src/plot_functions/plot_steering_vs_actual.rs
