// src/data_input/log_data.rs

use chrono::NaiveDateTime;

/// Structure to hold data parsed from a single row of the steering log.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub timestamp: NaiveDateTime, // Epoch + timestamp_us, UTC without zone.
    pub timestamp_us: i64,        // Raw timestamp column (microseconds since epoch).
    pub commanded_angle: f64,     // steeringWheelAngle
    pub actual_angle: f64,        // actual_steering
}

impl SampleRow {
    /// Builds a row from the raw microsecond timestamp.
    /// Returns `None` when the timestamp is outside the representable date-time range.
    pub fn from_micros(timestamp_us: i64, commanded_angle: f64, actual_angle: f64) -> Option<Self> {
        let timestamp = chrono::DateTime::from_timestamp_micros(timestamp_us)?.naive_utc();
        Some(Self {
            timestamp,
            timestamp_us,
            commanded_angle,
            actual_angle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_micros_converts_to_datetime() {
        let row = SampleRow::from_micros(1_500_000, 1.0, 2.0).unwrap();
        assert_eq!(row.timestamp.and_utc().timestamp(), 1);
        assert_eq!(row.timestamp.and_utc().timestamp_subsec_micros(), 500_000);
        assert_eq!(row.timestamp_us, 1_500_000);
    }

    #[test]
    fn from_micros_handles_negative_offsets() {
        let row = SampleRow::from_micros(-1, 0.0, 0.0).unwrap();
        assert_eq!(row.timestamp.format("%Y").to_string(), "1969");
    }
}

// src/data_input/log_data.rs
