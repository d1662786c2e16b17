//! Error types for vocab-core.
//!
//! Malformed *content* never produces an error anywhere in this crate:
//! unmatched sections degrade to empty defaults and non-string dictionary
//! values are skipped. The only typed failure is a batch input whose root
//! is not a JSON object at all.

use thiserror::Error;

/// Result type alias using BatchError.
pub type Result<T> = std::result::Result<T, BatchError>;

/// Errors from the batch restructuring pass.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("expected a JSON object mapping headword to markdown, found {found}")]
    NotAnObject { found: &'static str },
}
