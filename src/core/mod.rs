//! Core interest calculation logic
//!
//! - `rules` - One stateless calculation rule per account category
//! - `resolver` - Category to rule lookup
//! - `calculator` - The `calculate_interest` entry point
//! - `summary` - Per-category totals over a processing run
//! - `async` - Concurrent batch calculation for the async strategy

pub mod r#async;
pub mod calculator;
pub mod resolver;
pub mod rules;
pub mod summary;

pub use calculator::{calculate_interest, calculate_record};
pub use resolver::resolve;
pub use rules::CalculationRule;
pub use summary::{CategorySummary, InterestSummary};
