// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    CHART_MARGIN_RIGHT_PX, COLOR_GRID_BOLD, COLOR_GRID_LIGHT, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE,
    LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FRACTION, RANGE_PADDING_MIN,
    TIMESTAMP_LABEL_FORMAT, X_LABEL_COUNT, Y_LABEL_COUNT,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_MIN
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Formats an x-axis value (microseconds since epoch) as a wall-clock tick label.
pub fn format_timestamp_label(x_us: f64) -> String {
    if !x_us.is_finite() {
        return String::new();
    }
    match chrono::DateTime::from_timestamp_micros(x_us.round() as i64) {
        Some(dt) => dt.naive_utc().format(TIMESTAMP_LABEL_FORMAT).to_string(),
        None => format!("{x_us:.0}"),
    }
}

/// Splits a series into runs of finite points so that NaN/inf values break the line.
pub fn split_finite_segments(data: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{plot_type} Data Unavailable: {reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = message.len() as i32 * estimated_char_width;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x.max(0), center_y), text_style))?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A single time-series chart. `x_range` is in microseconds since epoch.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

fn draw_time_series_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .margin_right(CHART_MARGIN_RIGHT_PX)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x| format_timestamp_label(*x))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .bold_line_style(COLOR_GRID_BOLD.mix(0.8))
        .light_line_style(COLOR_GRID_LIGHT.mix(0.6))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        let segments = split_finite_segments(&s.data);
        let color = s.color;
        let legend = move |(x, y): (i32, i32)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
        };

        if segments.is_empty() {
            // Legend-only entry: keep the label visible even without finite points
            if !s.label.is_empty() {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (plot_config.x_range.start, plot_config.y_range.start),
                        0,
                        s.color.filled(),
                    )))?
                    .label(&s.label)
                    .legend(legend);
                legend_series_count += 1;
            }
            continue;
        }

        for (segment_idx, segment) in segments.into_iter().enumerate() {
            let drawn = chart.draw_series(LineSeries::new(
                segment,
                s.color.stroke_width(s.stroke_width),
            ))?;
            if segment_idx == 0 && !s.label.is_empty() {
                drawn.label(&s.label).legend(legend);
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Renders one titled time-series chart to a PNG file.
///
/// When `plot_config` is `None`, or holds no drawable data, a placeholder message is
/// drawn instead of the chart. The image is written either way.
pub fn draw_time_series_plot<'a>(
    output_path: &'a Path,
    main_title: &str,
    plot_type_name: &str,
    plot_config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        main_title,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let plot_area = root_area.margin(40, 5, 5, 10);

    let drawn = match plot_config {
        Some(config) => {
            let has_data = config
                .series
                .iter()
                .any(|s| s.data.iter().any(|(x, y)| x.is_finite() && y.is_finite()));
            let valid_ranges =
                config.x_range.end > config.x_range.start && config.y_range.end > config.y_range.start;
            if has_data && valid_ranges {
                draw_time_series_chart(&plot_area, config)?;
                true
            } else {
                let reason = if !has_data {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(&plot_area, plot_type_name, reason)?;
                false
            }
        }
        None => {
            draw_unavailable_message(&plot_area, plot_type_name, "No data points")?;
            false
        }
    };

    root_area.present()?;
    if drawn {
        log::info!("Plot saved as '{}'.", output_path.display());
    } else {
        log::warn!(
            "Plot '{}' saved with a placeholder message only: no drawable data.",
            output_path.display()
        );
    }
    Ok(())
}


// src/plot_framework.rs
