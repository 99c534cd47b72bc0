//! Error types for signal construction.

use mm_core::MmError;
use thiserror::Error;

/// Result type for signal construction.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur while building signals.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    /// Invalid argument provided to a signal constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<SignalError> for MmError {
    fn from(e: SignalError) -> Self {
        match e {
            SignalError::InvalidArg { what } => MmError::InvalidArg { what },
        }
    }
}
