//! Processing strategy module for batch conversion
//!
//! This module defines the Strategy pattern for complete conversion pipelines,
//! covering CSV reading, amount parsing and result output. Different
//! implementations (synchronous, asynchronous batch) are selected at runtime.

use crate::cli::StrategyType;
use crate::types::{ConversionResult, ParseOptions, ProcessingError};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete conversion pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Convert every amount in `input_path` and write the result CSV to `output`
    ///
    /// Output rows are in input order. A rejected amount becomes a row with an
    /// error column, and a malformed CSV row is logged and skipped; neither
    /// stops processing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A fatal I/O error occurs during reading or writing
    /// - The async runtime cannot be created or a task fails
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ProcessingError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    options: ParseOptions,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(options)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, options))
        }
    }
}

/// Per-run counters, logged when a run completes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, converted: &ConversionResult) {
        if converted.is_ok() {
            self.converted += 1;
        } else {
            self.rejected += 1;
        }
    }

    pub fn log(&self, strategy: &str) {
        tracing::info!(
            strategy,
            converted = self.converted,
            rejected = self.rejected,
            skipped = self.skipped,
            "conversion finished"
        );
    }
}
