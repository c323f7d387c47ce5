//! Database abstraction traits
//!
//! This module defines the capability the bulk loader requires from a
//! destination store. The loader depends only on [`RecordSink`], so the
//! destination can be swapped (a different engine, or an in-memory fake for
//! testing) without touching load control flow.

use crate::domain::{Record, StoreError};
use async_trait::async_trait;

/// Destination table for health records
pub const DESTINATION_TABLE: &str = "health_records";

/// Ordered column list of the bulk channel
///
/// Rows are written as `(date, activity, unit, value, source)`, mapped from a
/// [`Record`]'s `(start, kind, unit, value, source)`. The record's `end`
/// timestamp is not part of the destination contract.
pub const DESTINATION_COLUMNS: [&str; 5] = ["date", "activity", "unit", "value", "source"];

/// Bulk-ingestion capability of a destination store
///
/// A sink is a state machine driven by the loader in a fixed order:
/// `begin` → `copy_start` → `copy_row`* → `copy_finish` → `commit`, with
/// `rollback` on any failure after `begin`. Implementations hold whatever
/// resources (connection, transaction, bulk channel) the sequence needs and
/// must release them on rollback as well as commit.
#[async_trait]
pub trait RecordSink: Send {
    /// Open a transaction on the store
    async fn begin(&mut self) -> Result<(), StoreError>;

    /// Open the bulk-ingestion channel inside the current transaction
    ///
    /// The channel is bound to [`DESTINATION_TABLE`] with the
    /// [`DESTINATION_COLUMNS`] order.
    async fn copy_start(&mut self) -> Result<(), StoreError>;

    /// Stream one record through the bulk channel
    async fn copy_row(&mut self, record: &Record) -> Result<(), StoreError>;

    /// Signal end-of-data on the bulk channel
    ///
    /// Returns the number of rows the store accepted.
    async fn copy_finish(&mut self) -> Result<u64, StoreError>;

    /// Commit the transaction
    async fn commit(&mut self) -> Result<(), StoreError>;

    /// Roll back the transaction, discarding any staged rows
    async fn rollback(&mut self) -> Result<(), StoreError>;
}
