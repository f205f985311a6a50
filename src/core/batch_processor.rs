//! Batch processing with order-preserving partitioning
//!
//! `BatchProcessor` splits a batch of records into contiguous chunks, parses
//! each chunk on its own tokio task, and joins the tasks in spawn order so the
//! results come back in input order.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<AmountParser>  (shared, stateless parser)
//!     └── workers            (number of chunks per batch)
//! ```

use std::sync::Arc;

use crate::core::conversion::convert_record;
use crate::core::parser::AmountParser;
use crate::types::{AmountRecord, ConversionResult, ProcessingError};

/// Batch processor with chunk-based partitioning
///
/// Cloning is cheap; clones share the parser.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    parser: Arc<AmountParser>,
    workers: usize,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// `workers` is the number of chunks a batch is split into; zero is
    /// treated as one.
    pub fn new(parser: Arc<AmountParser>, workers: usize) -> Self {
        Self {
            parser,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Split `batch` into at most `workers` contiguous chunks
    ///
    /// # Guarantees
    ///
    /// - Each record appears in exactly one chunk
    /// - Concatenating the chunks gives back the original order
    /// - No chunk is empty
    pub fn partition(&self, batch: Vec<AmountRecord>) -> Vec<Vec<AmountRecord>> {
        let chunk_size = batch.len().div_ceil(self.workers).max(1);

        let mut chunks = Vec::with_capacity(self.workers);
        let mut records = batch.into_iter().peekable();
        while records.peek().is_some() {
            chunks.push(records.by_ref().take(chunk_size).collect());
        }

        chunks
    }

    /// Parse every record of one chunk, in order
    pub fn process_chunk(&self, chunk: Vec<AmountRecord>) -> Vec<ConversionResult> {
        chunk
            .into_iter()
            .map(|record| convert_record(&self.parser, record))
            .collect()
    }

    /// Process a batch with one tokio task per chunk
    ///
    /// Results are in input order. A rejected amount is a result like any
    /// other; only a failed task aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::Runtime`] if a task panicked or was
    /// cancelled.
    pub async fn process_batch(
        &self,
        batch: Vec<AmountRecord>,
    ) -> Result<Vec<ConversionResult>, ProcessingError> {
        let total = batch.len();

        let mut tasks = Vec::new();
        for chunk in self.partition(batch) {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move { processor.process_chunk(chunk) }));
        }

        let mut results = Vec::with_capacity(total);
        for task in tasks {
            let chunk_results = task
                .await
                .map_err(|e| ProcessingError::runtime(format!("conversion task failed: {e}")))?;
            results.extend(chunk_results);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<AmountRecord> {
        (0..count)
            .map(|i| AmountRecord::new(format!("{i}.5"), "EUR"))
            .collect()
    }

    fn processor(workers: usize) -> BatchProcessor {
        BatchProcessor::new(Arc::new(AmountParser::default()), workers)
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(processor(0).workers(), 1);
    }

    #[test]
    fn test_partition_empty_batch() {
        assert!(processor(4).partition(Vec::new()).is_empty());
    }

    #[test]
    fn test_partition_preserves_order() {
        let batch = records(10);
        let chunks = processor(3).partition(batch.clone());

        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![4, 4, 2]
        );
        assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
        assert_eq!(chunks.concat(), batch);
    }

    #[test]
    fn test_partition_fewer_records_than_workers() {
        let chunks = processor(8).partition(records(3));
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| chunk.len() == 1));
    }

    #[test]
    fn test_process_chunk() {
        let results = processor(1).process_chunk(vec![
            AmountRecord::new("1.5", "EUR"),
            AmountRecord::new("oops", "EUR"),
        ]);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result.as_ref().unwrap().minor_units, 150);
        assert!(results[1].result.is_err());
    }

    #[tokio::test]
    async fn test_process_batch_keeps_input_order() {
        let batch = records(25);
        let results = processor(4).process_batch(batch.clone()).await.unwrap();

        assert_eq!(results.len(), 25);
        for (i, (result, record)) in results.iter().zip(&batch).enumerate() {
            assert_eq!(&result.record, record);
            assert_eq!(
                result.result.as_ref().unwrap().minor_units,
                i as i64 * 100 + 50
            );
        }
    }

    #[tokio::test]
    async fn test_process_empty_batch() {
        let results = processor(4).process_batch(Vec::new()).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BatchProcessor>();
    }
}
