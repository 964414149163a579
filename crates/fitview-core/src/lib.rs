//! fitview-core: Headless logic for the fitview FIT viewer
//!
//! This crate provides everything the renderer does not own:
//! - Record model and ride summaries
//! - FIT parsing via the `fitparser` crate
//! - Timeline projection (elapsed labels + display datasets)
//! - Range-selection bookkeeping for drag-to-select
//! - Asynchronous loading with a last-wins request guard

pub mod loader;
pub mod parse;
pub mod projector;
pub mod record;
pub mod selection;

// Re-export commonly used types
pub use loader::{load_ride, LoadOutcome, RequestTracker};
pub use parse::{parse_records, FitError};
pub use projector::{
    format_elapsed, project, Dataset, DisplaySeries, SeriesKind, SeriesSelection,
    HEART_RATE_SERIES, POWER_SERIES,
};
pub use record::{Record, RideSummary};
pub use selection::{Highlight, RangeSelector};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
