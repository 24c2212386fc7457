use thiserror::Error;

/// Input that falls outside the key domain of a distribution sort.
///
/// Validation runs before the first write, so a slice handed back with one of
/// these errors is exactly as the caller left it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SortError {
    #[error("key {key} at index {index} is negative; this sort accepts non-negative integers only")]
    NegativeKey { index: usize, key: i64 },

    #[error("bucket key {key} at index {index} is not a finite non-negative number")]
    InvalidBucketKey { index: usize, key: f64 },
}

pub type Result<T> = std::result::Result<T, SortError>;
