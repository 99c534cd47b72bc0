//! Error type shared by every mechmetrics crate.
//!
//! Crate-level errors (`ModelError`, `SignalError`, `CritError`) convert into
//! [`MmError`] so callers combining several crates can use one `?` chain.

use thiserror::Error;

pub type MmResult<T> = Result<T, MmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MmError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown {what}: {name}")]
    Unknown { what: &'static str, name: String },

    /// Equipment that cannot be placed as requested.
    #[error("Invalid loadout: {reason}")]
    Loadout { reason: String },
}
