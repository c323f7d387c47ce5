//! PostgreSQL record sink
//!
//! Implements [`RecordSink`] over a single pooled connection using the
//! binary COPY protocol, which is the high-throughput bulk path into
//! PostgreSQL. Transaction control is issued as plain statements so the
//! connection, the transaction, and the COPY channel all share one lifetime
//! owned by the sink.

use crate::adapters::database::traits::{RecordSink, DESTINATION_COLUMNS, DESTINATION_TABLE};
use crate::domain::{Record, StoreError};
use async_trait::async_trait;
use std::pin::Pin;
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::Type;

/// PostgreSQL implementation of [`RecordSink`]
///
/// Holds one pooled connection for the duration of one bulk load. The
/// `begin`/`commit`/`rollback` statements and the COPY channel all run on
/// this connection, so the transaction is exclusive to the sink.
pub struct PostgresSink {
    conn: deadpool_postgres::Object,
    writer: Option<Pin<Box<BinaryCopyInWriter>>>,
}

impl PostgresSink {
    /// Create a sink over a pooled connection
    pub fn new(conn: deadpool_postgres::Object) -> Self {
        Self { conn, writer: None }
    }
}

#[async_trait]
impl RecordSink for PostgresSink {
    async fn begin(&mut self) -> Result<(), StoreError> {
        self.conn
            .batch_execute("BEGIN")
            .await
            .map_err(StoreError::new)
    }

    async fn copy_start(&mut self) -> Result<(), StoreError> {
        let statement = format!(
            "COPY {} ({}) FROM STDIN BINARY",
            DESTINATION_TABLE,
            DESTINATION_COLUMNS.join(", ")
        );
        let sink = self
            .conn
            .copy_in(statement.as_str())
            .await
            .map_err(StoreError::new)?;

        let writer = BinaryCopyInWriter::new(
            sink,
            &[
                Type::TIMESTAMPTZ,
                Type::TEXT,
                Type::TEXT,
                Type::INT4,
                Type::TEXT,
            ],
        );
        self.writer = Some(Box::pin(writer));
        Ok(())
    }

    async fn copy_row(&mut self, record: &Record) -> Result<(), StoreError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| StoreError::new("bulk channel is not open"))?;

        writer
            .as_mut()
            .write(&[
                &record.start,
                &record.kind,
                &record.unit,
                &record.value,
                &record.source,
            ])
            .await
            .map_err(StoreError::new)
    }

    async fn copy_finish(&mut self) -> Result<u64, StoreError> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| StoreError::new("bulk channel is not open"))?;

        writer.as_mut().finish().await.map_err(StoreError::new)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.conn
            .batch_execute("COMMIT")
            .await
            .map_err(StoreError::new)
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        // Abort any COPY still in flight before rolling the transaction back
        self.writer = None;

        self.conn
            .batch_execute("ROLLBACK")
            .await
            .map_err(StoreError::new)
    }
}
