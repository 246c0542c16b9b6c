//! Async components for batch interest calculation
//!
//! The rules are immutable statics, so no shared state needs guarding: the
//! batch processor only has to split work across tasks and put the results
//! back in input order.
//!
//! # Components
//!
//! - `BatchProcessor` - Splits a batch into chunks and calculates each chunk
//!   on its own tokio task

pub mod batch_processor;

pub use batch_processor::BatchProcessor;
