use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Calculate monthly interest for a file of accounts
#[derive(Parser, Debug)]
#[command(name = "interest-calculator")]
#[command(about = "Calculate monthly interest for a file of accounts", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing account records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent tasks per batch (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of tasks calculating a batch concurrently (default: CPU cores)"
    )]
    pub max_concurrent_tasks: Option<usize>,

    /// Write per-category totals to stderr after processing
    #[arg(long = "summary", help = "Write per-category totals as CSV to stderr")]
    pub summary: bool,
}

/// Available processing strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values take the defaults; zero values are replaced by the
    /// defaults with a warning (see [`BatchConfig::new`]).
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_tasks.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_tasks
                    .unwrap_or(default.max_concurrent_tasks),
            )
        } else {
            BatchConfig::default()
        }
    }
}
