//! Asynchronous CSV reader with batch interface
//!
//! Reads amount records from any `futures::io::AsyncRead` in batches. The
//! async strategy feeds it a tokio file through the `tokio-util` compat layer.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of AmountRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord)
//! ```

use crate::io::csv_format::CsvRecord;
use crate::types::{AmountRecord, ProcessingError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Malformed rows are logged and skipped; read failures are returned.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            skipped: 0,
        }
    }

    /// Read up to `batch_size` records
    ///
    /// Returns an empty vector at end of file.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::Io`] if the underlying reader fails.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<AmountRecord>, ProcessingError> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => batch.push(AmountRecord::from(csv_record)),
                Some(Err(e)) if e.is_io_error() => {
                    return Err(ProcessingError::Io {
                        message: e.to_string(),
                    })
                }
                Some(Err(e)) => {
                    let line = e.position().map(|pos| pos.line());
                    tracing::warn!(?line, error = %e, "skipping malformed row");
                    self.skipped += 1;
                }
                None => break,
            }
        }

        Ok(batch)
    }

    /// Number of malformed rows skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
