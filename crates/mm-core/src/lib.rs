//! mm-core: stable foundation for mechmetrics.
//!
//! Contains:
//! - error (shared error types)
//! - ids (stable compact handles for catalog and equipped items)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MmError, MmResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
