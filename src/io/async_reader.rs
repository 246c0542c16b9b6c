//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading of account records from an async byte source.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures' `AsyncRead` so any compatible source works (tokio files via
//!   tokio-util's compat layer, in-memory cursors in tests)
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of AccountRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::{record_line, warn_unrecognized};
use crate::types::{AccountRecord, InterestError};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;

/// Asynchronous CSV reader
///
/// Invalid rows are logged to stderr and skipped; only usable records are
/// returned from [`AsyncReader::read_batch`]. An I/O failure on the source
/// ends reading with an error.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    /// Loaded on the first read
    headers: Option<StringRecord>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            headers: None,
        }
    }

    /// Read a batch of account records
    ///
    /// Reads rows until `batch_size` valid records are collected or the input
    /// ends. Returns an empty vector once the end of the input is reached.
    ///
    /// # Errors
    ///
    /// Returns `InterestError::IoError` if the underlying source fails.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<AccountRecord>, InterestError> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            match self.next_record().await {
                Some(Ok(record)) => batch.push(record),
                Some(Err(e)) if e.is_fatal() => return Err(e),
                Some(Err(e)) => eprintln!("{}", e),
                None => break,
            }
        }

        Ok(batch)
    }

    /// Read and convert the next row, tagging row errors with their line
    async fn next_record(&mut self) -> Option<Result<AccountRecord, InterestError>> {
        if self.headers.is_none() {
            match self.csv_reader.headers().await {
                Ok(headers) => self.headers = Some(headers.clone()),
                Err(e) => return Some(Err(InterestError::from(e))),
            }
        }

        let mut raw = StringRecord::new();
        match self.csv_reader.read_record(&mut raw).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(InterestError::from(e))),
        }

        let start = raw.position().map_or(1, |pos| pos.line());
        let line = record_line(start, self.csv_reader.position().line(), raw.iter());

        let csv_record = match raw.deserialize::<CsvRecord>(self.headers.as_ref()) {
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

/// Deserialize failure without csv-async's own position
fn row_message(error: &csv_async::Error) -> String {
    match error.kind() {
        csv_async::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => error.to_string(),
    }
}
