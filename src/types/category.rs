//! Account categories
//!
//! An account's category is the only thing that decides which interest
//! formula applies to it. Labels coming from input files are parsed leniently
//! and anything that cannot be matched becomes [`AccountCategory::Unrecognized`],
//! which earns no interest.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Classification of a bank account affecting its interest formula
///
/// Variants are ordered the way they are listed here; summaries use that
/// order for deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountCategory {
    /// Everyday current account, 2% annual
    Current,

    /// Savings account, 4% annual
    Savings,

    /// Money market account, 6% annual
    StandardMoneyMarket,

    /// Money market account paying 7.5% annual, but only once the balance
    /// reaches 100,000.00
    HighRollerMoneyMarket,

    /// Any label that does not name a known category
    ///
    /// Resolves to the zero-interest rule.
    Unrecognized,
}

impl AccountCategory {
    /// Every recognized category, in declaration order
    pub const ALL: [AccountCategory; 4] = [
        AccountCategory::Current,
        AccountCategory::Savings,
        AccountCategory::StandardMoneyMarket,
        AccountCategory::HighRollerMoneyMarket,
    ];

    /// Snake-case label used for output
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::Current => "current",
            AccountCategory::Savings => "savings",
            AccountCategory::StandardMoneyMarket => "standard_money_market",
            AccountCategory::HighRollerMoneyMarket => "high_roller_money_market",
            AccountCategory::Unrecognized => "unrecognized",
        }
    }

    /// Whether this category names one of the known account kinds
    pub fn is_recognized(self) -> bool {
        self != AccountCategory::Unrecognized
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountCategory {
    type Err = Infallible;

    /// Parse a category label
    ///
    /// Matching is case-insensitive and ignores `_`, `-` and spaces, so
    /// `HIGH_ROLLER_MONEY_MARKET`, `high-roller-money-market` and
    /// `HighRollerMoneyMarket` are the same category. Unknown labels parse to
    /// [`AccountCategory::Unrecognized`]; parsing never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let category = match normalized.as_str() {
            "current" => AccountCategory::Current,
            "savings" => AccountCategory::Savings,
            "standardmoneymarket" => AccountCategory::StandardMoneyMarket,
            "highrollermoneymarket" => AccountCategory::HighRollerMoneyMarket,
            _ => AccountCategory::Unrecognized,
        };

        Ok(category)
    }
}
