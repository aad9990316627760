use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum EtasError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Output sequences have incompatible lengths: {magnitudes} magnitudes, {times} times")]
    SizeMismatch { magnitudes: usize, times: usize },
}

/// Convenience type for `Result<T, EtasError>`.
pub type EtasResult<T> = Result<T, EtasError>;
