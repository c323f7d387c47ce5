//! Export document decoding
//!
//! Turns a byte stream containing one export document into a
//! [`RecordBatch`](crate::domain::RecordBatch), resolving every timestamp
//! attribute through a pluggable [`TimestampParser`]. The decoder has no
//! dependency on the loader and can run standalone (e.g. for inspection via
//! a dry-run import).

pub mod document;
pub mod timestamp;

pub use document::decode_records;
pub use timestamp::{PermissiveTimestampParser, TimestampParser};
