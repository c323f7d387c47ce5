//! Import coordinator - main orchestrator for the import process
//!
//! This module coordinates the import workflow: open the export document,
//! decode it fully, then bulk-load the batch into PostgreSQL. The pipeline
//! is strictly sequential; the batch is never handed to the loader until
//! decoding has finished and succeeded.

use crate::adapters::postgresql::PostgresClient;
use crate::config::VitalsConfig;
use crate::core::decode::{decode_records, PermissiveTimestampParser};
use crate::core::import::summary::ImportSummary;
use crate::core::load::load_batch;
use crate::domain::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

/// Import coordinator
pub struct ImportCoordinator {
    config: VitalsConfig,
    client: PostgresClient,
    timestamps: PermissiveTimestampParser,
}

impl ImportCoordinator {
    /// Create a new import coordinator
    ///
    /// Connects to PostgreSQL, verifies the connection, and ensures the
    /// destination schema exists.
    pub async fn new(config: VitalsConfig) -> Result<Self> {
        let client = PostgresClient::new(config.postgresql.clone()).await?;

        client.test_connection().await?;
        client.ensure_schema().await?;

        tracing::info!(
            database = %client.connection_string_safe(),
            "Import coordinator ready"
        );

        Ok(Self {
            config,
            client,
            timestamps: PermissiveTimestampParser,
        })
    }

    /// Execute the import
    ///
    /// 1. Opens and fully decodes the export document
    /// 2. Bulk-loads the batch into PostgreSQL in one transaction
    ///    (skipped in dry-run mode)
    /// 3. Returns a summary
    ///
    /// Either every record in the document becomes visible in the
    /// destination or none does.
    pub async fn execute_import(&self, path: &Path) -> Result<ImportSummary> {
        let start_time = Instant::now();

        tracing::info!(path = %path.display(), "Decoding export document");

        let file = File::open(path).map_err(|e| {
            crate::domain::VitalsError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let batch = decode_records(BufReader::new(file), &self.timestamps)?;

        tracing::info!(records = batch.len(), "Export document decoded");

        let mut summary = ImportSummary::new();
        summary.records_decoded = batch.len();
        summary.dry_run = self.config.application.dry_run;

        if self.config.application.dry_run {
            tracing::info!("Dry run - skipping bulk load");
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let mut sink = self.client.sink().await?;
        let report = load_batch(&mut sink, &batch).await?;
        summary.rows_loaded = report.rows_copied;

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}
