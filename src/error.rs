use std::num::ParseIntError;

use thiserror::Error;

/// Errors returned by table construction and bucket introspection.
///
/// Looking up or removing a missing key is not an error; those operations
/// report absence with `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A table needs at least one bucket to address keys into.
    #[error("bucket count must be at least 1")]
    ZeroBuckets,

    /// A bucket index past the end of the bucket array.
    #[error("bucket index {index} out of range for table with {buckets} buckets")]
    BucketOutOfRange { index: usize, buckets: usize },

    /// A bucket count given as text that is not a non-negative integer.
    #[error("invalid bucket count {value:?}: {source}")]
    InvalidBucketCount {
        value: String,
        source: ParseIntError,
    },
}

/// Result type for fallible table operations.
pub type Result<T> = std::result::Result<T, Error>;
