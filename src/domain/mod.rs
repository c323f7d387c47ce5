//! Domain models and types for Vitals.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Domain models** ([`Record`], [`RecordBatch`])
//! - **Error types** ([`VitalsError`], [`DecodeError`], [`LoadError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VitalsError>`]:
//!
//! ```rust
//! use vitals::domain::{Result, VitalsError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = vitals::config::load_config("vitals.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DecodeError, LoadError, StoreError, VitalsError};
pub use record::{Record, RecordBatch};
pub use result::Result;
