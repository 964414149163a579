//! FIT byte parsing.
//!
//! Decoding the binary format is delegated entirely to the `fitparser`
//! crate; this module only extracts the record-message fields fitview
//! displays. Values are taken as-is: absent fields stay `None`, and nothing
//! here validates ranges.

use chrono::{DateTime, Utc};
use fitparser::de::from_bytes;
use fitparser::profile::MesgNum;

use crate::record::Record;

pub type Result<T> = std::result::Result<T, FitError>;

/// Errors from loading or parsing a recording.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a decodable FIT file.
    #[error("failed to parse FIT file: {0}")]
    Fit(String),
}

/// Parse raw FIT bytes into chronological records.
///
/// Only `record` messages are kept; messages without a timestamp are
/// dropped. Message order is preserved, which for FIT files is
/// chronological order.
pub fn parse_records(input: &[u8]) -> Result<Vec<Record>> {
    let messages = from_bytes(input).map_err(|e| FitError::Fit(e.to_string()))?;

    let mut out = Vec::new();
    for message in messages {
        if message.kind() != MesgNum::Record {
            continue;
        }

        let mut timestamp: Option<DateTime<Utc>> = None;
        let mut power: Option<f64> = None;
        let mut heart_rate: Option<f64> = None;

        for field in message.fields() {
            match field.name() {
                "timestamp" => {
                    if let fitparser::Value::Timestamp(ts) = field.value() {
                        timestamp = Some(ts.with_timezone(&Utc));
                    }
                }
                "power" => power = fit_value_to_f64(field.value()),
                "heart_rate" => heart_rate = fit_value_to_f64(field.value()),
                _ => {}
            }
        }

        if let Some(timestamp) = timestamp {
            out.push(Record::new(timestamp, power, heart_rate));
        }
    }

    Ok(out)
}

/// Widen a numeric FIT value to `f64`. Non-numeric values yield `None`.
fn fit_value_to_f64(value: &fitparser::Value) -> Option<f64> {
    match value {
        fitparser::Value::Float32(v) => Some(f64::from(*v)),
        fitparser::Value::Float64(v) => Some(*v),
        fitparser::Value::SInt8(v) => Some(f64::from(*v)),
        fitparser::Value::UInt8(v) => Some(f64::from(*v)),
        fitparser::Value::UInt8z(v) => Some(f64::from(*v)),
        fitparser::Value::SInt16(v) => Some(f64::from(*v)),
        fitparser::Value::UInt16(v) => Some(f64::from(*v)),
        fitparser::Value::UInt16z(v) => Some(f64::from(*v)),
        fitparser::Value::SInt32(v) => Some(f64::from(*v)),
        fitparser::Value::UInt32(v) => Some(f64::from(*v)),
        fitparser::Value::UInt32z(v) => Some(f64::from(*v)),
        fitparser::Value::SInt64(v) => Some(*v as f64),
        fitparser::Value::UInt64(v) => Some(*v as f64),
        fitparser::Value::UInt64z(v) => Some(*v as f64),
        fitparser::Value::Byte(v) => Some(f64::from(*v)),
        fitparser::Value::Array(values) => values.iter().find_map(fit_value_to_f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let err = parse_records(b"definitely not a FIT file").unwrap_err();
        assert!(matches!(err, FitError::Fit(_)));
    }

    #[test]
    fn test_empty_input_fails_to_parse() {
        // No FIT header at all
        assert!(parse_records(&[]).is_err());
    }

    #[test]
    fn test_fit_value_widening() {
        assert_eq!(fit_value_to_f64(&fitparser::Value::UInt16(250)), Some(250.0));
        assert_eq!(fit_value_to_f64(&fitparser::Value::UInt8(142)), Some(142.0));
        assert_eq!(fit_value_to_f64(&fitparser::Value::Float64(1.5)), Some(1.5));
        assert_eq!(
            fit_value_to_f64(&fitparser::Value::String("n/a".into())),
            None
        );
    }

    #[test]
    fn test_fit_value_array_takes_first_numeric() {
        let value = fitparser::Value::Array(vec![
            fitparser::Value::String("skip".into()),
            fitparser::Value::UInt16(77),
        ]);
        assert_eq!(fit_value_to_f64(&value), Some(77.0));
    }
}
