//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It coordinates the SyncReader (CSV input), the
//! calculator and the InterestWriter (CSV output).
//!
//! # Memory Efficiency
//!
//! Rows are read, calculated and written one at a time, so memory use does
//! not grow with the input.

use crate::core::calculator::calculate_record;
use crate::core::summary::InterestSummary;
use crate::io::csv_format::InterestWriter;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::InterestError;
use std::io::{Read, Write};
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use interest_calculator::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("accounts.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl SyncProcessingStrategy {
    /// Calculate every record from an open reader and write the results
    ///
    /// Row errors are logged and skipped. Fatal errors stop processing and are
    /// returned; rows written before the failure stay in `output`.
    pub fn process_reader<R: Read>(
        &self,
        reader: SyncReader<R>,
        output: &mut dyn Write,
    ) -> Result<InterestSummary, InterestError> {
        let mut writer = InterestWriter::new(output)?;
        let mut summary = InterestSummary::new();

        for result in reader {
            match result {
                Ok(account_record) => {
                    let interest_record = calculate_record(&account_record);
                    writer.write(&interest_record)?;
                    summary.record(&interest_record);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => eprintln!("{}", e),
            }
        }

        writer.finish()?;

        Ok(summary)
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<InterestSummary, InterestError> {
        let reader = SyncReader::new(input_path)?;
        self.process_reader(reader, output)
    }
}
