//! CSV format handling for account input and interest output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Interest and summary output serialization
//!
//! Conversion functions are pure (no I/O) for easy testing.

use crate::core::summary::InterestSummary;
use crate::types::{AccountCategory, AccountId, AccountRecord, InterestError, InterestRecord};
use csv::Writer;
use serde::Deserialize;
use std::io::Write;

/// Header of the interest output
pub const INTEREST_HEADER: [&str; 4] = ["account", "category", "balance", "interest"];

/// Header of the per-category summary output
pub const SUMMARY_HEADER: [&str; 4] = ["category", "accounts", "total_balance", "total_interest"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: account, category, balance.
/// Category and balance stay as text here; [`convert_csv_record`] interprets
/// them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub account: AccountId,
    pub category: String,
    pub balance: String,
}

/// Convert a CsvRecord to an AccountRecord
///
/// - Parses the category label (unknown labels become `Unrecognized`)
/// - Parses the balance as `f64`, rejecting empty, non-numeric and
///   non-finite values
///
/// Negative balances are passed through unchanged.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<AccountRecord, InterestError> {
    let category = parse_category(&csv_record.category);

    let balance_str = csv_record.balance.trim();
    let balance = match balance_str.parse::<f64>() {
        Ok(balance) if balance.is_finite() => balance,
        _ => {
            return Err(InterestError::invalid_balance(
                &csv_record.balance,
                csv_record.account,
            ))
        }
    };

    Ok(AccountRecord {
        account: csv_record.account,
        category,
        balance,
    })
}

/// Parse a category label from input
pub fn parse_category(label: &str) -> AccountCategory {
    match label.trim().parse() {
        Ok(category) => category,
        Err(never) => match never {},
    }
}

/// Streaming writer for interest output
///
/// Writes the header on creation and one row per record afterwards. Balances
/// are written with 2 decimal places, interest with 4.
pub struct InterestWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> InterestWriter<W> {
    /// Create a writer and emit the header row
    pub fn new(output: W) -> Result<Self, InterestError> {
        let mut writer = Writer::from_writer(output);
        writer.write_record(INTEREST_HEADER)?;
        Ok(Self { writer })
    }

    /// Write one computed record
    pub fn write(&mut self, record: &InterestRecord) -> Result<(), InterestError> {
        self.writer.write_record(&[
            record.account.to_string(),
            record.category.to_string(),
            format!("{:.2}", record.balance),
            format!("{:.4}", record.interest),
        ])?;
        Ok(())
    }

    /// Flush buffered rows to the underlying output
    pub fn finish(mut self) -> Result<(), InterestError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write interest records to CSV format
///
/// Records are written in the order given.
pub fn write_interest_csv(
    records: &[InterestRecord],
    output: &mut dyn Write,
) -> Result<(), InterestError> {
    let mut writer = InterestWriter::new(output)?;
    for record in records {
        writer.write(record)?;
    }
    writer.finish()
}

/// Write per-category totals to CSV format
///
/// Categories appear in declaration order; categories with no accounts are
/// omitted.
pub fn write_summary_csv(
    summary: &InterestSummary,
    output: &mut dyn Write,
) -> Result<(), InterestError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(SUMMARY_HEADER)?;

    for category in summary.categories() {
        writer.write_record(&[
            category.category.to_string(),
            category.accounts.to_string(),
            format!("{:.2}", category.total_balance),
            format!("{:.4}", category.total_interest),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::calculate_record;
    use rstest::rstest;

    fn csv_record(category: &str, balance: &str) -> CsvRecord {
        CsvRecord {
            account: 1,
            category: category.to_string(),
            balance: balance.to_string(),
        }
    }

    #[rstest]
    #[case("current", AccountCategory::Current)]
    #[case("SAVINGS", AccountCategory::Savings)]
    #[case("Standard_Money_Market", AccountCategory::StandardMoneyMarket)]
    #[case("  high_roller_money_market  ", AccountCategory::HighRollerMoneyMarket)]
    #[case("checking", AccountCategory::Unrecognized)]
    fn test_convert_csv_record_categories(
        #[case] category: &str,
        #[case] expected: AccountCategory,
    ) {
        let record = convert_csv_record(csv_record(category, "100.00")).unwrap();
        assert_eq!(record.category, expected);
        assert_eq!(record.account, 1);
        assert_eq!(record.balance, 100.0);
    }

    #[rstest]
    #[case::whitespace("  2500.50  ", 2500.50)]
    #[case::integer("12000", 12000.0)]
    #[case::zero("0", 0.0)]
    #[case::negative("-500.00", -500.0)]
    fn test_convert_csv_record_balance_parsing(#[case] balance: &str, #[case] expected: f64) {
        let record = convert_csv_record(csv_record("savings", balance)).unwrap();
        assert_eq!(record.balance, expected);
    }

    #[rstest]
    #[case::not_a_number("abc")]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::nan("NaN")]
    #[case::infinity("inf")]
    fn test_convert_csv_record_invalid_balance(#[case] balance: &str) {
        let result = convert_csv_record(csv_record("current", balance));
        assert_eq!(
            result,
            Err(InterestError::InvalidBalance {
                balance: balance.to_string(),
                account: 1,
            })
        );
    }

    #[rstest]
    #[case::sample_accounts(
        vec![
            AccountRecord { account: 1, category: AccountCategory::Current, balance: 100.0 },
            AccountRecord { account: 2, category: AccountCategory::Savings, balance: 100.0 },
            AccountRecord { account: 3, category: AccountCategory::StandardMoneyMarket, balance: 100.0 },
            AccountRecord { account: 4, category: AccountCategory::HighRollerMoneyMarket, balance: 100.0 },
            AccountRecord { account: 5, category: AccountCategory::HighRollerMoneyMarket, balance: 100_000.0 },
        ],
        "account,category,balance,interest\n\
         1,current,100.00,0.1667\n\
         2,savings,100.00,0.3333\n\
         3,standard_money_market,100.00,0.5000\n\
         4,high_roller_money_market,100.00,0.0000\n\
         5,high_roller_money_market,100000.00,625.0000\n"
    )]
    #[case::keeps_input_order(
        vec![
            AccountRecord { account: 9, category: AccountCategory::Savings, balance: 12_000.0 },
            AccountRecord { account: 3, category: AccountCategory::Unrecognized, balance: 5_000.0 },
        ],
        "account,category,balance,interest\n\
         9,savings,12000.00,40.0000\n\
         3,unrecognized,5000.00,0.0000\n"
    )]
    #[case::empty(vec![], "account,category,balance,interest\n")]
    fn test_write_interest_csv(#[case] accounts: Vec<AccountRecord>, #[case] expected: &str) {
        let records: Vec<_> = accounts.iter().map(calculate_record).collect();

        let mut output = Vec::new();
        write_interest_csv(&records, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_interest_writer_streams_rows() {
        let mut output = Vec::new();
        {
            let mut writer = InterestWriter::new(&mut output).unwrap();
            writer
                .write(&calculate_record(&AccountRecord {
                    account: 7,
                    category: AccountCategory::Current,
                    balance: 2500.50,
                }))
                .unwrap();
            writer.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "account,category,balance,interest\n7,current,2500.50,4.1675\n"
        );
    }

    #[test]
    fn test_write_summary_csv() {
        let mut summary = InterestSummary::new();
        for record in [
            AccountRecord { account: 1, category: AccountCategory::Savings, balance: 12_000.0 },
            AccountRecord { account: 2, category: AccountCategory::Current, balance: 100.0 },
            AccountRecord { account: 3, category: AccountCategory::Savings, balance: 6_000.0 },
        ] {
            summary.record(&calculate_record(&record));
        }

        let mut output = Vec::new();
        write_summary_csv(&summary, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "category,accounts,total_balance,total_interest\n\
             current,1,100.00,0.1667\n\
             savings,2,18000.00,60.0000\n"
        );
    }

    #[test]
    fn test_write_summary_csv_empty() {
        let mut output = Vec::new();
        write_summary_csv(&InterestSummary::new(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "category,accounts,total_balance,total_interest\n"
        );
    }
}
