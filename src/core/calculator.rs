//! Top-level interest calculation
//!
//! [`calculate_interest`] is the library's entry point: resolve the rule for
//! a category, then apply it to the balance.

use crate::core::resolver::resolve;
use crate::types::{AccountCategory, AccountRecord, Balance, InterestRecord, MonthlyInterest};

/// Compute one month of interest for an account
///
/// Never fails; unrecognized categories yield `0.0`.
///
/// # Examples
///
/// ```
/// use interest_calculator::{calculate_interest, AccountCategory};
///
/// assert_eq!(calculate_interest(AccountCategory::HighRollerMoneyMarket, 100.0), 0.0);
/// assert_eq!(calculate_interest(AccountCategory::HighRollerMoneyMarket, 100_000.0), 625.0);
/// ```
pub fn calculate_interest(category: AccountCategory, balance: Balance) -> MonthlyInterest {
    resolve(category).apply(balance)
}

/// Compute the interest for an input record
pub fn calculate_record(record: &AccountRecord) -> InterestRecord {
    InterestRecord {
        account: record.account,
        category: record.category,
        balance: record.balance,
        interest: calculate_interest(record.category, record.balance),
    }
}
