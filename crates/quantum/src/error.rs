use thiserror::Error;

pub type QuantumResult<T> = Result<T, QuantumError>;

#[derive(Debug, Clone, Error)]
pub enum QuantumError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
