//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_csv_record, write_interest_csv, write_summary_csv, CsvRecord, InterestWriter,
};
pub use sync_reader::SyncReader;

use crate::types::AccountRecord;

/// Report a row whose category will earn no interest
pub(crate) fn warn_unrecognized(line: u64, label: &str, record: &AccountRecord) {
    if !record.category.is_recognized() {
        eprintln!(
            "Line {}: unrecognized account category '{}' for account {}, no interest applied",
            line, label, record.account
        );
    }
}

/// Physical line a record started on
///
/// `start` is the reader position stamped on the record and `end` the reader
/// position after it. The stamp is taken before blank lines are skipped, so
/// the start is recovered by counting back from the end past the record's own
/// terminator and any newlines inside quoted fields.
pub(crate) fn record_line<'a>(
    start: u64,
    end: u64,
    fields: impl Iterator<Item = &'a str>,
) -> u64 {
    let embedded: u64 = fields.map(|field| field.matches('\n').count() as u64).sum();
    end.saturating_sub(embedded + 1).max(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::consecutive_rows(2, 3, vec!["1", "current", "100"], 2)]
    #[case::after_blank_lines(3, 6, vec!["4", "savings", "abc"], 5)]
    #[case::unterminated_last_row(4, 4, vec!["4", "savings", "abc"], 4)]
    #[case::quoted_newline(2, 4, vec!["1", "current", "a\nb"], 2)]
    fn test_record_line(
        #[case] start: u64,
        #[case] end: u64,
        #[case] fields: Vec<&str>,
        #[case] expected: u64,
    ) {
        assert_eq!(record_line(start, end, fields.into_iter()), expected);
    }
}
