//! Account-related types for the interest calculator
//!
//! This module defines the input record for one account and the record
//! produced once its monthly interest has been computed.

use super::category::AccountCategory;

/// Account identifier
///
/// Supports account IDs from 0 to 4,294,967,295
pub type AccountId = u32;

/// Monetary balance of an account
///
/// Non-negative by contract; nothing enforces it.
pub type Balance = f64;

/// Interest earned over one month, in the same unit as [`Balance`]
pub type MonthlyInterest = f64;

/// One account as read from input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountRecord {
    /// The account ID
    pub account: AccountId,

    /// Category deciding which interest rule applies
    pub category: AccountCategory,

    /// Current balance
    pub balance: Balance,
}

/// An account together with its computed monthly interest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestRecord {
    pub account: AccountId,
    pub category: AccountCategory,
    pub balance: Balance,
    pub interest: MonthlyInterest,
}
