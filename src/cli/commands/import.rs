//! Import command implementation
//!
//! This module implements the `import` command for loading a health-data
//! export document into PostgreSQL.

use crate::config::load_config;
use crate::core::import::ImportCoordinator;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the export document (overrides import.export_path)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - decode the document without writing to PostgreSQL
    #[arg(long)]
    pub dry_run: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting import command");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let export_path = self
            .file
            .clone()
            .unwrap_or_else(|| config.import.export_path.clone());
        let export_path = PathBuf::from(export_path);

        if !export_path.exists() {
            tracing::error!(path = %export_path.display(), "Export document not found");
            eprintln!("Export document not found: {}", export_path.display());
            return Ok(2); // Configuration error exit code
        }

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("🔍 DRY RUN MODE - No data will be written to the database");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run). Re-importing the
        // same document duplicates its rows, so give the operator a chance
        // to bail out.
        if !self.yes && !config.application.dry_run {
            println!("Import Configuration:");
            println!("  Export document: {}", export_path.display());
            println!("  Destination table: health_records");
            println!();
            println!("Note: records are appended; re-importing a document duplicates its rows.");
            print!("Proceed with import? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Import cancelled.");
                return Ok(0);
            }
        }

        // Create import coordinator
        tracing::info!("Creating import coordinator");
        let coordinator = match ImportCoordinator::new(config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create import coordinator");
                eprintln!("Failed to initialize import: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Execute import
        println!("🚀 Starting import...");
        println!();

        let summary = match coordinator.execute_import(&export_path).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Import failed");
                eprintln!("Import failed: {e}");
                eprintln!("No data was committed.");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!();
        println!("📊 Import Summary:");
        println!("  Records decoded: {}", summary.records_decoded);
        if summary.dry_run {
            println!("  Rows loaded: 0 (dry run)");
        } else {
            println!("  Rows loaded: {}", summary.rows_loaded);
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        Ok(0)
    }
}
