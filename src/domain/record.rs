//! Health record domain model
//!
//! A [`Record`] is one measurement observation extracted from an export
//! document. Records are immutable once decoded: the decoder either produces
//! a complete, validated record or fails the whole batch.

use chrono::{DateTime, FixedOffset};

/// One measurement observation from a health-data export
///
/// The `kind` and `unit` fields are opaque to the pipeline and passed through
/// verbatim; no unit conversion or range checking happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// What was measured (e.g. step count, heart rate)
    pub kind: String,

    /// Originating device or application
    pub source: String,

    /// Measurement unit, passed through verbatim
    pub unit: String,

    /// Start of the observation window, with resolved timezone offset
    pub start: DateTime<FixedOffset>,

    /// End of the observation window
    ///
    /// Retained as parsed; the bulk loader's current destination contract
    /// does not transfer it.
    pub end: DateTime<FixedOffset>,

    /// Integer magnitude of the observation
    pub value: i32,
}

/// The ordered sequence of records extracted from one export document
///
/// Records appear in document order. A batch is produced by exactly one
/// decode call and consumed read-only by exactly one load call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch(Vec<Record>);

impl RecordBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        RecordBatch(Vec::new())
    }

    /// Number of records in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the batch contains no records
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// Append a record, preserving document order
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Records as a slice, in document order
    pub fn records(&self) -> &[Record] {
        &self.0
    }
}

impl From<Vec<Record>> for RecordBatch {
    fn from(records: Vec<Record>) -> Self {
        RecordBatch(records)
    }
}

impl<'a> IntoIterator for &'a RecordBatch {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
