// Vitals - Health Export to PostgreSQL ETL Tool
// Copyright (c) 2026 Vitals Contributors
// Licensed under the MIT License

//! # Vitals - Health Export to PostgreSQL ETL
//!
//! Vitals is an ETL tool built in Rust that loads health-data XML exports
//! (years of timestamped measurement records) into PostgreSQL for analytics
//! and querying.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Decoding** export documents with a streaming XML reader and a
//!   permissive multi-format timestamp parser
//! - **Loading** decoded records into PostgreSQL atomically via the binary
//!   COPY protocol
//! - **Orchestrating** the decode-then-load pipeline with summary reporting
//!
//! ## Architecture
//!
//! Vitals follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (decode, load, import orchestration)
//! - [`adapters`] - External integrations (destination store abstraction,
//!   PostgreSQL)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitals::config::load_config;
//! use vitals::core::import::ImportCoordinator;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("vitals.toml")?;
//!
//!     // Create import coordinator
//!     let coordinator = ImportCoordinator::new(config).await?;
//!
//!     // Execute import
//!     let summary = coordinator.execute_import(Path::new("export.xml")).await?;
//!
//!     println!("Loaded {} rows", summary.rows_loaded);
//!     Ok(())
//! }
//! ```
//!
//! ## Atomicity
//!
//! The pipeline is all-or-nothing at both stages. Decoding either produces
//! the complete record batch or fails with a structured
//! [`DecodeError`](domain::DecodeError); a single bad timestamp invalidates
//! the whole document. Loading streams the batch through one transaction and
//! commits only if every record is accepted; any rejection rolls the
//! transaction back, so the destination never holds a partial import.
//!
//! Imports are deliberately not idempotent: re-importing a document appends
//! its rows again. Deduplication, if wanted, belongs to a layer above this
//! tool.
//!
//! ## Error Handling
//!
//! Vitals uses the [`domain::VitalsError`] type for all errors:
//!
//! ```rust,no_run
//! use vitals::domain::VitalsError;
//!
//! fn example() -> Result<(), VitalsError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = vitals::config::load_config("vitals.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
