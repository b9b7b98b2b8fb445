//! Filter set errors.

use thiserror::Error;

/// Errors from filter set operations.
///
/// All variants are local and recoverable: the operation that failed leaves
/// the original set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Filter key is empty after trimming.
    #[error("Filter key must not be empty")]
    EmptyKey,

    /// Filter value is empty after trimming.
    #[error("Filter value must not be empty")]
    EmptyValue,

    /// Remove index is outside the set.
    #[error("Filter index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
