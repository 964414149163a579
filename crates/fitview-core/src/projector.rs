//! Timeline projection.
//!
//! Turns a chronological record set into display-ready elapsed-time labels
//! and datasets. `project` is pure: same input, same output, nothing
//! mutated.

use serde::Serialize;

use crate::record::Record;

/// Display name of the power dataset.
pub const POWER_SERIES: &str = "Power";

/// Display name of the heart-rate dataset.
pub const HEART_RATE_SERIES: &str = "Heart Rate";

/// Which series to include in the projection.
///
/// Mutated only by explicit user toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSelection {
    pub show_power: bool,
    pub show_heart_rate: bool,
}

impl Default for SeriesSelection {
    fn default() -> Self {
        Self {
            show_power: true,
            show_heart_rate: true,
        }
    }
}

/// How a dataset is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
}

/// One plottable series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Legend name.
    pub name: &'static str,
    /// Bar or line rendering.
    pub kind: SeriesKind,
    /// One value per record, input order.
    pub values: Vec<f64>,
}

/// Labels plus datasets, ready for the renderer. Recomputed on every record
/// or selection change, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplaySeries {
    /// Elapsed-time label per record, `HH:MM:SS`.
    pub labels: Vec<String>,
    /// Selected datasets, Power before Heart Rate.
    pub datasets: Vec<Dataset>,
}

/// Project records into display series.
///
/// Labels are elapsed time since the first record. Absent power or
/// heart-rate values contribute 0 at their index. An empty record set yields
/// an empty `DisplaySeries`: with no first record there is no time origin to
/// label against.
pub fn project(records: &[Record], selection: SeriesSelection) -> DisplaySeries {
    let Some(first) = records.first() else {
        return DisplaySeries::default();
    };
    let t0 = first.timestamp;

    let labels = records
        .iter()
        .map(|r| format_elapsed((r.timestamp - t0).num_seconds()))
        .collect();

    let mut datasets = Vec::new();
    if selection.show_power {
        datasets.push(Dataset {
            name: POWER_SERIES,
            kind: SeriesKind::Bar,
            values: records.iter().map(|r| r.power.unwrap_or(0.0)).collect(),
        });
    }
    if selection.show_heart_rate {
        datasets.push(Dataset {
            name: HEART_RATE_SERIES,
            kind: SeriesKind::Line,
            values: records.iter().map(|r| r.heart_rate.unwrap_or(0.0)).collect(),
        });
    }

    DisplaySeries { labels, datasets }
}

/// Format elapsed whole seconds as zero-padded `HH:MM:SS`.
///
/// The hour component is unbounded: a multi-day recording formats as
/// `"27:15:00"`, not wrapped at 24.
pub fn format_elapsed(secs: i64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
