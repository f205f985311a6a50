//! I/O module
//!
//! Handles CSV input and result output for batch conversion.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, result serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{result_row, CsvRecord, ResultWriter, OUTPUT_HEADER};
pub use sync_reader::SyncReader;
