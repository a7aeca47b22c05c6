// tests/render_test.rs

use std::fs;
use std::path::Path;

use steering_accuracy_plot::plot_framework::draw_time_series_plot;
use steering_accuracy_plot::{plot_steering_vs_actual, SampleRow};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn rows(data: &[(i64, f64, f64)]) -> Vec<SampleRow> {
    data.iter()
        .map(|&(t, c, a)| SampleRow::from_micros(t, c, a).unwrap())
        .collect()
}

fn assert_png_written(path: &Path) {
    let bytes = fs::read(path).expect("output image should exist");
    assert!(bytes.len() > PNG_SIGNATURE.len(), "output image is empty");
    assert_eq!(&bytes[..PNG_SIGNATURE.len()], &PNG_SIGNATURE);
}

#[test]
fn steering_chart_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("steering_plot.png");
    let data = rows(&[
        (1_700_000_000_000_000, 4.0, 4.2),
        (1_700_000_000_020_000, 6.0, 4.5),
        (1_700_000_000_040_000, -3.0, -2.9),
    ]);

    plot_steering_vs_actual(&data, 66.67, &output).unwrap();
    assert_png_written(&output);
}

#[test]
fn all_nan_rows_still_write_placeholder_image() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nan_plot.png");
    let data = rows(&[(0, f64::NAN, f64::NAN), (1, f64::NAN, f64::NAN)]);

    plot_steering_vs_actual(&data, 0.0, &output).unwrap();
    assert_png_written(&output);
}

#[test]
fn missing_config_still_writes_image() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty_plot.png");

    draw_time_series_plot(&output, "Empty", "Steering", None).unwrap();
    assert_png_written(&output);
}
