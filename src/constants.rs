// src/constants.rs

use plotters::style::RGBColor;

// Fixed input/output locations.
pub const INPUT_FILE_PATH: &str = "/tmp/plotting_data.csv";
pub const OUTPUT_FILE_PATH: &str = "steering_plot.png";

// Source column labels, in file order.
pub const COLUMN_TIMESTAMP: &str = "Timestamp";
pub const COLUMN_STEERING_WHEEL_ANGLE: &str = "steeringWheelAngle";
pub const COLUMN_ACTUAL_STEERING: &str = "actual_steering";
pub const EXPECTED_COLUMN_COUNT: usize = 3;

// Accuracy metric thresholds.
pub const ACTIVE_ANGLE_EPSILON: f64 = 0.0001; // |actual| must exceed this for a row to count
pub const RELATIVE_TOLERANCE: f64 = 0.25; // Allowed |commanded - actual| as a fraction of |actual|

// Plot dimensions (10 x 6 inches at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// Range padding used by calculate_range.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const RANGE_PADDING_MIN: f64 = 0.5;
pub const X_RANGE_MIN_PADDING_US: f64 = 500_000.0; // Used when every sample shares one timestamp
pub const X_RANGE_PADDING_FRACTION: f64 = 0.05;

// Room right of the chart so the last tick label is not clipped.
pub const CHART_MARGIN_RIGHT_PX: i32 = 110;

// --- Plot Text ---
pub const PLOT_MAIN_TITLE: &str = "Steering Wheel Angle vs Actual Steering";
pub const LABEL_STEERING_WHEEL_ANGLE: &str = "Steering Wheel Angle";
pub const LABEL_ACTUAL_STEERING: &str = "Actual Steering";
pub const X_AXIS_LABEL: &str = "Timestamp";
pub const Y_AXIS_LABEL: &str = "Value";
pub const TIMESTAMP_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// --- Plot Color Assignments ---
pub const COLOR_STEERING_WHEEL_ANGLE: RGBColor = RGBColor(31, 119, 180);
pub const COLOR_ACTUAL_STEERING: RGBColor = RGBColor(255, 127, 14);
pub const COLOR_GRID_BOLD: RGBColor = RGBColor(176, 176, 176);
pub const COLOR_GRID_LIGHT: RGBColor = RGBColor(230, 230, 230);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Number of tick labels per axis
pub const X_LABEL_COUNT: usize = 4;
pub const Y_LABEL_COUNT: usize = 10;

// src/constants.rs
