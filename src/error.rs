use thiserror::Error;

/// Error types for the genkmeans library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// Rejected construction input: k of zero, an empty collection, or
    /// fewer distinct values than requested clusters
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input data does not have the expected shape
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}
