//! Bulk loading
//!
//! Transfers a decoded [`RecordBatch`](crate::domain::RecordBatch) into the
//! destination store atomically, via the store's bulk-ingestion capability.

pub mod loader;

pub use loader::{load_batch, LoadReport};
