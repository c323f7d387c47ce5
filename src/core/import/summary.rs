//! Import summary and reporting

use std::time::Duration;

/// Summary of an import operation
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Number of records decoded from the export document
    pub records_decoded: usize,

    /// Number of rows committed to the destination store
    pub rows_loaded: u64,

    /// Whether this was a dry run (decode only, no load)
    pub dry_run: bool,

    /// Duration of the import
    pub duration: Duration,
}

impl ImportSummary {
    /// Create a new empty import summary
    pub fn new() -> Self {
        Self {
            records_decoded: 0,
            rows_loaded: 0,
            dry_run: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            records_decoded = self.records_decoded,
            rows_loaded = self.rows_loaded,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Import completed"
        );
    }
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_summary_creation() {
        let summary = ImportSummary::new();

        assert_eq!(summary.records_decoded, 0);
        assert_eq!(summary.rows_loaded, 0);
        assert!(!summary.dry_run);
        assert_eq!(summary.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_import_summary_with_duration() {
        let summary = ImportSummary::new().with_duration(Duration::from_secs(42));
        assert_eq!(summary.duration, Duration::from_secs(42));
    }
}
