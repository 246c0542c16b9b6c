//! Chunked batch calculation for async processing
//!
//! This module provides the `BatchProcessor` struct, which spreads a batch of
//! account records across tokio tasks and reassembles the results.
//!
//! # Design
//!
//! A batch is cut into at most `max_concurrent_tasks` contiguous chunks.
//! Each chunk is calculated on its own task. Tasks are awaited in the order
//! they were spawned, so concatenating their output restores input order
//! without any sorting.
//!
//! ```text
//! batch ──┬── chunk 0 ── task 0 ──┐
//!         ├── chunk 1 ── task 1 ──┼── results (input order)
//!         └── chunk n ── task n ──┘
//! ```

use crate::core::calculator::calculate_record;
use crate::types::{AccountRecord, InterestError, InterestRecord};
use tokio::task::JoinHandle;

/// Batch processor with order-preserving chunking
#[derive(Debug, Clone, Copy)]
pub struct BatchProcessor {
    /// Upper bound on chunks (and therefore tasks) per batch
    max_concurrent_tasks: usize,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// A limit of zero is treated as one.
    pub fn new(max_concurrent_tasks: usize) -> Self {
        Self {
            max_concurrent_tasks: max_concurrent_tasks.max(1),
        }
    }

    /// Number of records each chunk holds for a batch of `batch_len` records
    pub fn chunk_size(&self, batch_len: usize) -> usize {
        batch_len.div_ceil(self.max_concurrent_tasks).max(1)
    }

    /// Calculate interest for a batch
    ///
    /// Returns one `InterestRecord` per input record, in input order. A chunk
    /// task that fails to complete fails the whole batch.
    pub async fn process_batch(
        &self,
        batch: Vec<AccountRecord>,
    ) -> Result<Vec<InterestRecord>, InterestError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let chunk_size = self.chunk_size(batch.len());

        let mut tasks = Vec::with_capacity(self.max_concurrent_tasks);
        for chunk in batch.chunks(chunk_size) {
            let chunk = chunk.to_vec();
            tasks.push(tokio::spawn(async move {
                chunk.iter().map(calculate_record).collect::<Vec<_>>()
            }));
        }

        join_in_order(tasks, batch.len()).await
    }
}

/// Await chunk tasks in spawn order and concatenate their output
///
/// A panicked or cancelled task is an `IoError`: its rows are lost, so the
/// run cannot produce complete output.
async fn join_in_order<T>(
    tasks: Vec<JoinHandle<Vec<T>>>,
    capacity: usize,
) -> Result<Vec<T>, InterestError> {
    let mut results = Vec::with_capacity(capacity);
    for task in tasks {
        let chunk_results = task.await.map_err(|e| InterestError::IoError {
            message: format!("Task panicked: {}", e),
        })?;
        results.extend(chunk_results);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::calculate_interest;
    use crate::types::AccountCategory;
    use rstest::rstest;

    fn account_records(count: u32) -> Vec<AccountRecord> {
        (0..count)
            .map(|i| AccountRecord {
                account: i,
                category: AccountCategory::ALL[i as usize % AccountCategory::ALL.len()],
                balance: f64::from(i) * 1000.0,
            })
            .collect()
    }

    #[rstest]
    #[case::even_split(4, 100, 25)]
    #[case::uneven_split(3, 10, 4)]
    #[case::more_tasks_than_records(8, 3, 1)]
    #[case::single_task(1, 50, 50)]
    #[case::zero_tasks_treated_as_one(0, 50, 50)]
    fn test_chunk_size(
        #[case] max_tasks: usize,
        #[case] batch_len: usize,
        #[case] expected: usize,
    ) {
        let processor = BatchProcessor::new(max_tasks);
        assert_eq!(processor.chunk_size(batch_len), expected);
    }

    #[tokio::test]
    async fn test_process_batch_empty() {
        let processor = BatchProcessor::new(4);
        let results = processor.process_batch(Vec::new()).await.unwrap();
        assert!(results.is_empty());
    }

    #[rstest]
    #[case::one_task(1)]
    #[case::three_tasks(3)]
    #[case::many_tasks(16)]
    #[tokio::test]
    async fn test_process_batch_preserves_order(#[case] max_tasks: usize) {
        let processor = BatchProcessor::new(max_tasks);
        let batch = account_records(250);

        let results = processor.process_batch(batch.clone()).await.unwrap();

        assert_eq!(results.len(), batch.len());
        for (record, result) in batch.iter().zip(&results) {
            assert_eq!(result.account, record.account);
            assert_eq!(result.category, record.category);
            assert_eq!(result.balance, record.balance);
            assert_eq!(
                result.interest,
                calculate_interest(record.category, record.balance)
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_process_batch_on_multi_thread_runtime() {
        let processor = BatchProcessor::new(4);
        let batch = account_records(1000);

        let results = processor.process_batch(batch).await.unwrap();

        let accounts: Vec<_> = results.iter().map(|r| r.account).collect();
        let expected: Vec<_> = (0..1000).collect();
        assert_eq!(accounts, expected);
    }

    #[tokio::test]
    async fn test_join_in_order_fails_on_panicked_task() {
        let tasks = vec![
            tokio::spawn(async { vec![1, 2] }),
            tokio::spawn(async { panic!("chunk failed") }),
            tokio::spawn(async { vec![5, 6] }),
        ];

        let result: Result<Vec<i32>, _> = join_in_order(tasks, 6).await;

        assert!(matches!(
            result,
            Err(InterestError::IoError { message }) if message.starts_with("Task panicked")
        ));
    }

    #[tokio::test]
    async fn test_join_in_order_concatenates_in_spawn_order() {
        let tasks = vec![
            tokio::spawn(async { vec![1, 2] }),
            tokio::spawn(async { vec![3] }),
            tokio::spawn(async { vec![4, 5] }),
        ];

        assert_eq!(join_in_order(tasks, 5).await.unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BatchProcessor>();
    }
}
