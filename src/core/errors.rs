/*!
 * Error Types
 * Pool error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pool operation result
pub type PoolResult<T> = Result<T, PoolError>;

/// Buffer pool errors with serialization support
///
/// Exhaustion is never an error: an empty bucket degrades to allocation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PoolError {
    #[error("Invalid max array length: {0}")]
    #[diagnostic(
        code(pool::invalid_max_array_length),
        help("The largest pooled length must be at least 1. Values are clamped to [16, 2^30].")
    )]
    InvalidMaxArrayLength(usize),

    #[error("Invalid max arrays per bucket: {0}")]
    #[diagnostic(
        code(pool::invalid_max_arrays_per_bucket),
        help("Each bucket must be able to retain at least one buffer.")
    )]
    InvalidMaxArraysPerBucket(usize),

    #[error("Buffer length {actual} does not match bucket capacity {expected}")]
    #[diagnostic(
        code(pool::length_mismatch),
        help("Only buffers rented from this size class can be stored in its bucket.")
    )]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Failed to allocate buffer of {requested} elements")]
    #[diagnostic(
        code(pool::allocation_failed),
        help("The allocator refused the request. Check the requested length for overflow.")
    )]
    AllocationFailed { requested: usize },
}
