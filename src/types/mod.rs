//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `category`: Account categories and their textual labels
//! - `account`: Account records and computed interest records
//! - `error`: Error types for the I/O boundary

pub mod account;
pub mod category;
pub mod error;

pub use account::{AccountId, AccountRecord, Balance, InterestRecord, MonthlyInterest};
pub use category::AccountCategory;
pub use error::InterestError;
