//! Processing strategy module for account files
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! covering CSV parsing, interest calculation and output. This allows
//! different implementations (synchronous, asynchronous batch) to be selected
//! at runtime. Every strategy produces the same output for the same input.

use crate::cli::StrategyType;
use crate::core::summary::InterestSummary;
use crate::types::InterestError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete account processing pipelines
///
/// Each strategy reads account records from a CSV file, calculates their
/// monthly interest and writes one output row per valid input row, in input
/// order.
pub trait ProcessingStrategy: Send + Sync {
    /// Process accounts from input file and write interest to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing account records
    /// * `output` - Writer receiving the interest CSV
    ///
    /// # Returns
    ///
    /// * `Ok(InterestSummary)` with per-category totals for every row written
    /// * `Err(InterestError)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - Output cannot be written
    ///
    /// Malformed rows are logged to stderr and skipped; they never cause
    /// this method to return an error.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<InterestSummary, InterestError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
