//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over account records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records sequentially,
//! delegating parsing and conversion to the csv_format module. Records are
//! read one at a time; the file is never loaded whole.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding `Result<AccountRecord, InterestError>`
//! for each CSV row:
//!
//! ```no_run
//! use interest_calculator::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("accounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Account: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - File-level errors (file not found, I/O errors) are returned from `new()`
//! - An I/O failure mid-file is yielded as a fatal `IoError`, after which the
//!   iterator ends
//! - Individual row errors are yielded as Err variants carrying the physical
//!   line number the row started on
//! - Rows with unrecognized categories are yielded as Ok, with a warning on stderr

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::{record_line, warn_unrecognized};
use crate::types::{AccountRecord, InterestError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over account records.
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl SyncReader<File> {
    /// Create a new SyncReader from a file path
    pub fn new(path: &Path) -> Result<Self, InterestError> {
        let file = File::open(path).map_err(|e| InterestError::open_failed(path, e))?;
        Self::from_reader(file)
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a new SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts so short rows surface as row errors
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// The header row is read up front.
    pub fn from_reader(source: R) -> Result<Self, InterestError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<AccountRecord, InterestError>;

    /// Get the next account record from the CSV input
    ///
    /// # Returns
    ///
    /// * `Some(Ok(AccountRecord))` - Successfully parsed record
    /// * `Some(Err(InterestError))` - Parse or conversion error with line
    ///   number, or a fatal `IoError`
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = StringRecord::new();
        match self.reader.read_record(&mut raw) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(InterestError::from(e))),
        }

        let start = raw.position().map_or(1, |pos| pos.line());
        let line = record_line(start, self.reader.position().line(), raw.iter());

        let csv_record = match raw.deserialize::<CsvRecord>(Some(&self.headers)) {
            Ok(csv_record) => csv_record,
            Err(e) => return Some(Err(InterestError::parse_error(Some(line), row_message(&e)))),
        };

        let label = csv_record.category.clone();
        let record = convert_csv_record(csv_record)
            .map_err(|e| InterestError::parse_error(Some(line), e.to_string()));

        if let Ok(record) = &record {
            warn_unrecognized(line, &label, record);
        }

        Some(record)
    }
}

/// Deserialize failure without csv's own position, which may be off by the
/// number of blank lines skipped
fn row_message(error: &csv::Error) -> String {
    match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => error.to_string(),
    }
}
