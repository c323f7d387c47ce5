//! PostgreSQL database integration
//!
//! This module provides integration with PostgreSQL for bulk-loading health
//! records via the binary COPY protocol.

pub mod client;
pub mod sink;

pub use client::PostgresClient;
pub use sink::PostgresSink;
