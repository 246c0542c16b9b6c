//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. Records are read in batches and each batch is
//! calculated across several tokio tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_tasks)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (chunking + tasks, order preserving)
//!     └── InterestWriter (CSV output)
//! ```
//!
//! Batches are handled one after another and written as soon as they are
//! complete, so output order always matches input order.

use crate::core::r#async::BatchProcessor;
use crate::core::summary::InterestSummary;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::InterestWriter;
use crate::strategy::ProcessingStrategy;
use crate::types::InterestError;
use std::io::Write;
use std::path::Path;

/// Configuration for batch processing
///
/// Controls how many records are read per batch and how many tasks a batch
/// is split across.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Maximum number of tasks calculating a batch concurrently
    pub max_concurrent_tasks: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_tasks: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning on stderr.
    pub fn new(batch_size: usize, max_concurrent_tasks: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_tasks = if max_concurrent_tasks == 0 {
            eprintln!(
                "Warning: Invalid max_concurrent_tasks ({}), using default ({})",
                max_concurrent_tasks, default.max_concurrent_tasks
            );
            default.max_concurrent_tasks
        } else {
            max_concurrent_tasks
        };

        Self {
            batch_size,
            max_concurrent_tasks,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process accounts from input file and write interest to output
    ///
    /// 1. Creates a tokio multi-threaded runtime sized to `max_concurrent_tasks`
    /// 2. Opens the input through tokio-util's compat layer for csv-async
    /// 3. Reads a batch, calculates it on the BatchProcessor, writes it
    /// 4. Repeats until the input is exhausted
    ///
    /// A read failure on the input or a failed calculation task ends the run
    /// with an error.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<InterestSummary, InterestError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_tasks.max(1))
            .build()
            .map_err(|e| InterestError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let processor = BatchProcessor::new(self.config.max_concurrent_tasks);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| InterestError::open_failed(input_path, e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            let mut reader = AsyncReader::new(compat_file);
            let mut writer = InterestWriter::new(output)?;
            let mut summary = InterestSummary::new();

            loop {
                let batch = reader.read_batch(self.config.batch_size).await?;

                // If batch is empty, we've reached end of file
                if batch.is_empty() {
                    break;
                }

                for interest_record in processor.process_batch(batch).await? {
                    writer.write(&interest_record)?;
                    summary.record(&interest_record);
                }
            }

            writer.finish()?;

            Ok(summary)
        })
    }
}
