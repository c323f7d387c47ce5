//! Configuration management for Vitals.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Vitals uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`VITALS_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [import]
//! export_path = "export.xml"
//!
//! [postgresql]
//! connection_string = "${VITALS_PG_URL}"
//! max_connections = 4
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vitals::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("vitals.toml")?;
//! println!("Export path: {}", config.import.export_path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ImportConfig, LoggingConfig, PostgreSQLConfig, VitalsConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
