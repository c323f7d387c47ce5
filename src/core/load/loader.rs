//! Bulk loader
//!
//! Transfers a decoded record batch into the destination store inside a
//! single transaction. The loader drives the store's [`RecordSink`]
//! capability through a fixed sequence (begin, open bulk channel, stream
//! rows, finalize, commit) and rolls back on any failure after `begin`, so
//! either every record in the batch becomes visible or none does.
//!
//! There is no retry at this layer; retry policy belongs to the caller.

use crate::adapters::database::traits::RecordSink;
use crate::domain::{LoadError, RecordBatch};

/// Result of a successful bulk load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of rows the store accepted and committed
    pub rows_copied: u64,
}

/// Load a record batch into the destination store
///
/// Streams every record in batch order through the sink's bulk channel and
/// commits only if every step succeeded. On any failure after the
/// transaction opens, the transaction is rolled back and no partial data is
/// persisted.
///
/// Re-running a load with the same batch produces duplicate rows: the
/// destination has no deduplication key and this layer deliberately does not
/// invent one.
///
/// # Errors
///
/// * [`LoadError::Connection`] - the transaction could not be opened
/// * [`LoadError::Schema`] - the bulk channel was rejected
/// * [`LoadError::RecordRejected`] - the store rejected a record mid-stream
/// * [`LoadError::Commit`] - finalization or commit failed
pub async fn load_batch(
    sink: &mut dyn RecordSink,
    batch: &RecordBatch,
) -> Result<LoadReport, LoadError> {
    sink.begin()
        .await
        .map_err(|e| LoadError::Connection(e.to_string()))?;

    match copy_batch(sink, batch).await {
        Ok(rows_copied) => match sink.commit().await {
            Ok(()) => {
                tracing::info!(rows = rows_copied, "Batch committed");
                Ok(LoadReport { rows_copied })
            }
            Err(e) => {
                rollback_quietly(sink).await;
                Err(LoadError::Commit(e.to_string()))
            }
        },
        Err(err) => {
            rollback_quietly(sink).await;
            Err(err)
        }
    }
}

/// Stream the batch through the bulk channel and finalize it
async fn copy_batch(sink: &mut dyn RecordSink, batch: &RecordBatch) -> Result<u64, LoadError> {
    sink.copy_start()
        .await
        .map_err(|e| LoadError::Schema(e.to_string()))?;

    for (index, record) in batch.iter().enumerate() {
        sink.copy_row(record)
            .await
            .map_err(|e| LoadError::RecordRejected {
                index,
                reason: e.to_string(),
            })?;
    }

    sink.copy_finish()
        .await
        .map_err(|e| LoadError::Commit(e.to_string()))
}

/// Roll back, logging rather than masking the original failure
async fn rollback_quietly(sink: &mut dyn RecordSink) {
    if let Err(e) = sink.rollback().await {
        // The store may already have aborted the transaction on its side
        tracing::warn!(error = %e, "Rollback after failed load reported an error");
    }
}
