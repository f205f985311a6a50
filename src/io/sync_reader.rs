//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over amount records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<AmountRecord, ProcessingError>` for each CSV row:
//!
//! ```no_run
//! use money_parser::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("amounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{} {}", record.amount, record.currency),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - A malformed row is yielded as [`ProcessingError::Csv`] carrying its line
//! - A read failure mid-file is yielded as [`ProcessingError::Io`]

use crate::io::csv_format::CsvRecord;
use crate::types::{AmountRecord, ProcessingError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader trims whitespace from all fields, allows flexible field
    /// counts and uses an 8KB buffer. The header row is read here, so an
    /// unreadable input fails before any record is yielded.
    pub fn new(path: &Path) -> Result<Self, ProcessingError> {
        let file = File::open(path).map_err(|e| ProcessingError::open_failed(path, e))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        reader.headers()?;

        Ok(Self { reader })
    }
}

impl Iterator for SyncReader {
    type Item = Result<AmountRecord, ProcessingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        Some(
            deserializer
                .next()?
                .map(AmountRecord::from)
                .map_err(ProcessingError::from),
        )
    }
}
