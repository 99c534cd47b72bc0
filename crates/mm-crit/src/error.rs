//! Error types for destruction simulation.

use mm_core::MmError;
use mm_model::Location;
use thiserror::Error;

pub type CritResult<T> = Result<T, CritError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CritError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Loadout has no {location:?} component")]
    MissingLocation { location: Location },
}

impl From<CritError> for MmError {
    fn from(e: CritError) -> Self {
        match e {
            CritError::InvalidArg { what } => MmError::InvalidArg { what },
            other @ CritError::MissingLocation { .. } => MmError::Loadout {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_core_error() {
        let e: MmError = CritError::MissingLocation {
            location: Location::Head,
        }
        .into();
        assert!(matches!(e, MmError::Loadout { .. }));
    }
}
