//! Asynchronous batch processing strategy
//!
//! Multi-threaded implementation of the ProcessingStrategy trait. Records are
//! read in batches; each batch is split into contiguous chunks that are parsed
//! in parallel and joined back in order before the next batch is read.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (contiguous chunks, one tokio task each)
//!     └── ResultWriter (ordered CSV output)
//! ```

use crate::core::{AmountParser, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::ResultWriter;
use crate::strategy::{ProcessingStrategy, RunSummary};
use crate::types::{ParseOptions, ProcessingError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how many records are read per batch and how many worker threads
/// (and chunks per batch) are used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Worker threads, and chunks per batch
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a logged warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// Batches are processed one after another so output order equals input
/// order; parallelism happens inside each batch.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    options: ParseOptions,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, options: ParseOptions) -> Self {
        Self { config, options }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ProcessingError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| ProcessingError::runtime(format!("Failed to create tokio runtime: {e}")))?;

        runtime.block_on(async {
            let parser = Arc::new(AmountParser::new(self.options));
            let processor = BatchProcessor::new(parser, self.config.max_concurrent_batches);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| ProcessingError::open_failed(input_path, e))?;

            // csv-async reads futures::io, tokio files need the compat layer
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut writer = ResultWriter::new(output)?;
            let mut summary = RunSummary::default();

            loop {
                let batch = reader.read_batch(self.config.batch_size).await?;
                if batch.is_empty() {
                    break;
                }

                let results = processor.process_batch(batch).await?;
                results.iter().for_each(|converted| summary.record(converted));
                writer.write_all(&results)?;
            }

            writer.flush()?;
            summary.skipped = reader.skipped();
            summary.log("async");

            Ok(())
        })
    }
}
