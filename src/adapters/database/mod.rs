//! Database abstraction layer
//!
//! This module provides a trait-based abstraction for the destination store,
//! allowing the bulk loader to work against PostgreSQL in production and an
//! in-memory fake in tests.

pub mod traits;

pub use traits::{RecordSink, DESTINATION_COLUMNS, DESTINATION_TABLE};
