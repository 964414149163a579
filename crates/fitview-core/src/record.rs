//! Ride record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample from a recording.
///
/// Power and heart rate are optional: devices drop fields freely, and the
/// projection substitutes 0 for display. The record itself keeps `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Absolute sample time (UTC).
    pub timestamp: DateTime<Utc>,

    /// Instantaneous power in watts, if reported.
    pub power: Option<f64>,

    /// Heart rate in bpm, if reported.
    pub heart_rate: Option<f64>,
}

impl Record {
    /// Create a record.
    pub fn new(timestamp: DateTime<Utc>, power: Option<f64>, heart_rate: Option<f64>) -> Self {
        Self {
            timestamp,
            power,
            heart_rate,
        }
    }
}

/// Overview of a ride, for the `info` command and the status bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideSummary {
    /// Number of samples.
    pub records: usize,

    /// Whole seconds between the first and last sample.
    pub duration_secs: i64,

    /// Mean power over samples that reported it.
    pub avg_power: Option<f64>,

    /// Peak power.
    pub max_power: Option<f64>,

    /// Mean heart rate over samples that reported it.
    pub avg_heart_rate: Option<f64>,

    /// Peak heart rate.
    pub max_heart_rate: Option<f64>,
}

impl RideSummary {
    /// Summarize a chronological record set.
    ///
    /// Averages skip absent samples rather than counting them as 0.
    pub fn from_records(records: &[Record]) -> Self {
        let duration_secs = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_seconds(),
            _ => 0,
        };

        let power: Vec<f64> = records.iter().filter_map(|r| r.power).collect();
        let heart_rate: Vec<f64> = records.iter().filter_map(|r| r.heart_rate).collect();

        Self {
            records: records.len(),
            duration_secs,
            avg_power: mean(&power),
            max_power: peak(&power),
            avg_heart_rate: mean(&heart_rate),
            max_heart_rate: peak(&heart_rate),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn peak(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_summary_empty() {
        let summary = RideSummary::from_records(&[]);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.duration_secs, 0);
        assert_eq!(summary.avg_power, None);
        assert_eq!(summary.max_heart_rate, None);
    }

    #[test]
    fn test_summary_skips_absent_samples() {
        let records = vec![
            Record::new(ts(0), Some(100.0), Some(80.0)),
            Record::new(ts(1), None, Some(90.0)),
            Record::new(ts(2), Some(200.0), None),
        ];
        let summary = RideSummary::from_records(&records);

        assert_eq!(summary.records, 3);
        assert_eq!(summary.duration_secs, 2);
        // Absent power at index 1 is excluded, not averaged as 0
        assert_eq!(summary.avg_power, Some(150.0));
        assert_eq!(summary.max_power, Some(200.0));
        assert_eq!(summary.avg_heart_rate, Some(85.0));
        assert_eq!(summary.max_heart_rate, Some(90.0));
    }

    #[test]
    fn test_summary_single_record() {
        let records = vec![Record::new(ts(0), Some(250.0), None)];
        let summary = RideSummary::from_records(&records);
        assert_eq!(summary.duration_secs, 0);
        assert_eq!(summary.avg_power, Some(250.0));
        assert_eq!(summary.avg_heart_rate, None);
    }
}
