//! Core business logic for Vitals.
//!
//! # Modules
//!
//! - [`decode`] - Export document decoding with permissive timestamp parsing
//! - [`load`] - Atomic bulk loading into the destination store
//! - [`import`] - Pipeline orchestration and reporting
//!
//! # Import Workflow
//!
//! 1. **Decode**: stream the export document into a record batch; any
//!    structural or timestamp problem fails the whole batch
//! 2. **Load**: stream the batch through the store's bulk channel inside a
//!    single transaction; commit only if every record is accepted
//! 3. **Report**: summarize counts and duration
//!
//! # Example
//!
//! ```rust,no_run
//! use vitals::config::load_config;
//! use vitals::core::import::ImportCoordinator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("vitals.toml")?;
//! let coordinator = ImportCoordinator::new(config).await?;
//! let summary = coordinator.execute_import(Path::new("export.xml")).await?;
//!
//! println!("Loaded {} rows", summary.rows_loaded);
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod import;
pub mod load;
