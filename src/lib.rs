//! Interest Calculator Library
//!
//! # Overview
//!
//! This library selects an interest formula from an account's category and
//! applies it to the account's balance, producing one month of interest.
//!
//! ```
//! use interest_calculator::{calculate_interest, AccountCategory};
//!
//! let interest = calculate_interest(AccountCategory::Savings, 12_000.0);
//! assert_eq!(interest, 40.0);
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Core data types (AccountCategory, AccountRecord, errors)
//! - [`core`] - Calculation logic:
//!   - [`core::rules`] - One stateless rule per category
//!   - [`core::resolver`] - Category to rule lookup
//!   - [`core::calculator`] - The `calculate_interest` entry point
//! - [`io`] - CSV reading and writing
//! - [`strategy`] - Sync and async pipelines over account files
//! - [`cli`] - CLI arguments parsing
//!
//! # Account Categories
//!
//! | Category | Monthly interest |
//! |---|---|
//! | Current | balance × (0.02 / 12) |
//! | Savings | balance × (0.04 / 12) |
//! | Standard money market | balance × (0.06 / 12) |
//! | High roller money market | 0 below 100,000.00, else balance × (0.075 / 12) |
//! | Unrecognized | 0 |

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{
    calculate_interest, calculate_record, resolve, CalculationRule, InterestSummary,
};
pub use crate::io::{write_interest_csv, write_summary_csv};
pub use crate::types::{
    AccountCategory, AccountId, AccountRecord, Balance, InterestError, InterestRecord,
    MonthlyInterest,
};
