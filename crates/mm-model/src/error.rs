//! Error types for catalog and loadout queries.

use mm_core::{ItemId, MmError};
use thiserror::Error;

use crate::chassis::Location;

/// Errors raised while building catalogs and loadouts or parsing stat
/// expressions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown stat component '{component}' in \"{expression}\"")]
    UnknownStat { component: char, expression: String },

    #[error("Unknown item {id}")]
    UnknownItem { id: ItemId },

    #[error("Unknown item name \"{name}\"")]
    UnknownName { name: String },

    #[error("Item {id} is incompatible: {what}")]
    Incompatible { id: ItemId, what: &'static str },

    #[error("Not enough free slots in {location:?}: need {needed}, have {free}")]
    SlotsExceeded {
        location: Location,
        needed: u32,
        free: u32,
    },

    #[error("Location {location:?} does not exist on this chassis")]
    MissingLocation { location: Location },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<ModelError> for MmError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidArg { what } => MmError::InvalidArg { what },
            ModelError::UnknownStat { .. } => MmError::InvalidArg {
                what: "malformed stat expression",
            },
            ModelError::UnknownItem { id } => MmError::Unknown {
                what: "item",
                name: id.to_string(),
            },
            ModelError::UnknownName { name } => MmError::Unknown { what: "item", name },
            other @ (ModelError::Incompatible { .. }
            | ModelError::SlotsExceeded { .. }
            | ModelError::MissingLocation { .. }) => MmError::Loadout {
                reason: other.to_string(),
            },
        }
    }
}
