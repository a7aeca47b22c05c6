// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::{
    COLUMN_ACTUAL_STEERING, COLUMN_STEERING_WHEEL_ANGLE, COLUMN_TIMESTAMP, EXPECTED_COLUMN_COUNT,
};
use crate::data_input::error::LoadError;
use crate::data_input::log_data::SampleRow;

/// Parses the headerless steering log at `input_file_path`.
///
/// Columns are fixed: `timestamp (us), steeringWheelAngle, actual_steering`.
/// Any unreadable file or malformed row aborts the load; rows are returned in file order.
pub fn parse_log_file(input_file_path: &Path) -> Result<Vec<SampleRow>, LoadError> {
    log::info!("Reading steering log '{}'", input_file_path.display());
    let file = File::open(input_file_path).map_err(|source| LoadError::Open {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    parse_rows(BufReader::new(file), input_file_path)
}

/// Parses steering log rows from any reader. See [`parse_log_file`].
/// An empty reader is reported as `LoadError::Empty` with the path `<reader>`.
pub fn parse_log_reader<R: Read>(reader: R) -> Result<Vec<SampleRow>, LoadError> {
    parse_rows(reader, Path::new("<reader>"))
}

fn parse_rows<R: Read>(reader: R, source: &Path) -> Result<Vec<SampleRow>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // Field count is checked per row below for a clearer error
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut all_log_data: Vec<SampleRow> = Vec::new();
    for (row_index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(row_index as u64 + 1);
        all_log_data.push(parse_record(&record, row)?);
    }

    if all_log_data.is_empty() {
        return Err(LoadError::Empty {
            path: source.to_path_buf(),
        });
    }

    log::info!("Finished reading {} data rows.", all_log_data.len());
    if let (Some(first), Some(last)) = (all_log_data.first(), all_log_data.last()) {
        log::debug!("Time span: {} .. {}", first.timestamp, last.timestamp);
    }
    Ok(all_log_data)
}

/// Angle fields left empty read as NaN; such rows drop out of the metric and break the plot line.
fn parse_angle(value: &str) -> Option<f64> {
    if value.is_empty() {
        Some(f64::NAN)
    } else {
        value.parse::<f64>().ok()
    }
}

fn parse_record(record: &StringRecord, row: u64) -> Result<SampleRow, LoadError> {
    if record.len() != EXPECTED_COLUMN_COUNT {
        return Err(LoadError::FieldCount {
            row,
            found: record.len(),
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or("");
    let invalid = |column: &'static str, value: &str| LoadError::InvalidField {
        row,
        column,
        value: value.to_string(),
    };

    let timestamp_us = field(0)
        .parse::<i64>()
        .map_err(|_| invalid(COLUMN_TIMESTAMP, field(0)))?;
    let commanded_angle = parse_angle(field(1))
        .ok_or_else(|| invalid(COLUMN_STEERING_WHEEL_ANGLE, field(1)))?;
    let actual_angle =
        parse_angle(field(2)).ok_or_else(|| invalid(COLUMN_ACTUAL_STEERING, field(2)))?;

    SampleRow::from_micros(timestamp_us, commanded_angle, actual_angle).ok_or(
        LoadError::TimestampOutOfRange {
            row,
            micros: timestamp_us,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_file_order() {
        let input = "3000000,1.5,2.0\n1000000,-0.5,0.0\n";
        let rows = parse_log_reader(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp_us, 3_000_000);
        assert_eq!(rows[1].timestamp_us, 1_000_000);
        assert_eq!(rows[0].commanded_angle, 1.5);
        assert_eq!(rows[1].actual_angle, 0.0);
    }

    #[test]
    fn trims_whitespace_and_skips_blank_lines() {
        let input = " 10 , 1.0 ,2.0\n\n20,3.0, 4.0 \n";
        let rows = parse_log_reader(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].commanded_angle, 3.0);
        assert_eq!(rows[1].actual_angle, 4.0);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let input = "10,1.0,2.0\n20,3.0\n";
        match parse_log_reader(input.as_bytes()) {
            Err(LoadError::FieldCount { row, found }) => {
                assert_eq!(row, 2);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_field() {
        let input = "10,abc,2.0\n";
        match parse_log_reader(input.as_bytes()) {
            Err(LoadError::InvalidField { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, COLUMN_STEERING_WHEEL_ANGLE);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_fractional_timestamp() {
        let input = "10.5,1.0,2.0\n";
        assert!(matches!(
            parse_log_reader(input.as_bytes()),
            Err(LoadError::InvalidField { column: COLUMN_TIMESTAMP, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_timestamp() {
        let input = format!("{},1.0,2.0\n", i64::MAX);
        assert!(matches!(
            parse_log_reader(input.as_bytes()),
            Err(LoadError::TimestampOutOfRange { row: 1, .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        match parse_log_reader("".as_bytes()) {
            Err(LoadError::Empty { path }) => assert_eq!(path, Path::new("<reader>")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_angle_field_reads_as_nan() {
        let rows = parse_log_reader("10,,2.0\n20,1.0,\n30,1.0,1.0\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].commanded_angle.is_nan());
        assert_eq!(rows[0].actual_angle, 2.0);
        assert!(rows[1].actual_angle.is_nan());
        assert_eq!(crate::compute_accuracy(&rows), 50.0);
    }

    #[test]
    fn empty_timestamp_stays_fatal() {
        assert!(matches!(
            parse_log_reader(",1.0,2.0\n".as_bytes()),
            Err(LoadError::InvalidField { row: 1, column: COLUMN_TIMESTAMP, .. })
        ));
    }
}

// src/data_input/log_parser.rs
