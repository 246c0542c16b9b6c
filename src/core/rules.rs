//! Interest calculation rules
//!
//! Each account category has one rule turning a balance into a month's
//! interest. Rules hold no state, so a single instance of each is shared by
//! every caller (see [`crate::core::resolver`]).

use crate::types::{Balance, MonthlyInterest};
use std::fmt::Debug;

/// Number of interest periods in a year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual rate paid on current accounts
pub const CURRENT_ANNUAL_RATE: f64 = 0.02;

/// Annual rate paid on savings accounts
pub const SAVINGS_ANNUAL_RATE: f64 = 0.04;

/// Annual rate paid on standard money market accounts
pub const MONEY_MARKET_ANNUAL_RATE: f64 = 0.06;

/// Annual rate paid on high roller money market accounts at or above the minimum
pub const HIGH_ROLLER_ANNUAL_RATE: f64 = 0.075;

/// Balance a high roller account must reach before it earns anything
pub const HIGH_ROLLER_MINIMUM_BALANCE: Balance = 100_000.00;

/// A pure function from balance to monthly interest
///
/// Implementations must be stateless and total over all `f64` balances.
/// Negative balances are not rejected.
pub trait CalculationRule: Send + Sync + Debug {
    /// Compute one month of interest on `balance`
    fn apply(&self, balance: Balance) -> MonthlyInterest;
}

/// Monthly interest at a flat annual rate
///
/// The rate is divided down to a monthly rate before multiplying.
fn monthly(balance: Balance, annual_rate: f64) -> MonthlyInterest {
    balance * (annual_rate / MONTHS_PER_YEAR)
}

/// Current accounts: 2% annual on the whole balance
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentAccountRule;

impl CalculationRule for CurrentAccountRule {
    fn apply(&self, balance: Balance) -> MonthlyInterest {
        monthly(balance, CURRENT_ANNUAL_RATE)
    }
}

/// Savings accounts: 4% annual on the whole balance
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsAccountRule;

impl CalculationRule for SavingsAccountRule {
    fn apply(&self, balance: Balance) -> MonthlyInterest {
        monthly(balance, SAVINGS_ANNUAL_RATE)
    }
}

/// Standard money market accounts: 6% annual on the whole balance
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyMarketRule;

impl CalculationRule for MoneyMarketRule {
    fn apply(&self, balance: Balance) -> MonthlyInterest {
        monthly(balance, MONEY_MARKET_ANNUAL_RATE)
    }
}

/// High roller money market accounts
///
/// Nothing below [`HIGH_ROLLER_MINIMUM_BALANCE`]; 7.5% annual on the whole
/// balance once the minimum is reached. The minimum itself qualifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighRollerMoneyMarketRule;

impl CalculationRule for HighRollerMoneyMarketRule {
    fn apply(&self, balance: Balance) -> MonthlyInterest {
        if balance < HIGH_ROLLER_MINIMUM_BALANCE {
            0.0
        } else {
            monthly(balance, HIGH_ROLLER_ANNUAL_RATE)
        }
    }
}

/// Fallback for unrecognized categories: always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterestRule;

impl CalculationRule for NoInterestRule {
    fn apply(&self, _balance: Balance) -> MonthlyInterest {
        0.0
    }
}
