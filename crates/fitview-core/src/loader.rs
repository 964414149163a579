//! Asynchronous ride loading.
//!
//! A load is single-shot: the whole file is read, parsed off the async
//! runtime, and delivered as one completion. There is no streaming and no
//! cancellation; overlapping loads are resolved by [`RequestTracker`],
//! which drops completions tagged with anything but the latest request id.

use std::path::Path;

use tracing::warn;

use crate::parse::{parse_records, Result};
use crate::record::Record;

/// Read and parse a FIT file.
///
/// Parsing runs on a blocking thread so large files do not stall the
/// runtime. Failures are reported on the diagnostic channel here, once, so
/// every caller inherits the same policy.
pub async fn load_ride(path: &Path) -> Result<Vec<Record>> {
    let result = read_and_parse(path).await;
    if let Err(e) = &result {
        warn!(path = %path.display(), error = %e, "failed to load ride");
    }
    result
}

async fn read_and_parse(path: &Path) -> Result<Vec<Record>> {
    let bytes = tokio::fs::read(path).await?;
    tokio::task::spawn_blocking(move || parse_records(&bytes))
        .await
        .map_err(|e| std::io::Error::other(format!("parse task failed: {e}")))?
}

/// Completion signal for one load request.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Id handed out by [`RequestTracker::begin`].
    pub request: u64,
    /// The parsed records, or the load error.
    pub result: Result<Vec<Record>>,
}

/// Monotonic request ids for overlapping loads.
///
/// Each load begins with a fresh id; a completion is only applied if its id
/// is still the latest one handed out, so the last-submitted load wins
/// regardless of completion order.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Create a tracker with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and return its id.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a completion for `id` is still the one we want.
    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest && id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::FitError;
    use std::io::Write;

    #[test]
    fn test_request_ids_are_monotonic() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        // Ids never issued are not current either
        assert!(!tracker.is_current(0));
        assert!(!tracker.is_current(second + 1));
    }

    #[test]
    fn test_fresh_tracker_accepts_nothing() {
        let tracker = RequestTracker::new();
        assert!(!tracker.is_current(0));
        assert!(!tracker.is_current(1));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.fit");
        let err = load_ride(&path).await.unwrap_err();
        assert!(matches!(err, FitError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_garbage_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.fit");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not a fit file at all").unwrap();
        drop(file);

        let err = load_ride(&path).await.unwrap_err();
        assert!(matches!(err, FitError::Fit(_)));
    }
}
