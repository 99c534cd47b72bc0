//! Time-integrable signals for weapon fire and heat.
//!
//! A signal is a pure function of simulation time returning the quantity
//! accumulated over `[0, t]` (heat, damage). Signals compose: a truncated
//! signal wraps another signal, sums add signals together.
//!
//! # Architecture
//!
//! - [`Signal`] is the contract; every implementation is stateless
//! - Primitives: [`ConstantSignal`], [`ImpulseTrain`], [`TruncatedSignal`]
//! - Weapon signals: [`ExpectedHeatSignal`], [`DoubleFireBurstSignal`]
//! - Stochastic signals also implement [`ProbabilityMass`]
//!
//! # Example
//!
//! ```
//! use mm_signals::{ImpulseTrain, Signal, TruncatedSignal};
//!
//! let volleys = ImpulseTrain::new(4.0, 5.0).unwrap();
//! let limited = TruncatedSignal::new(volleys, 4.0);
//! assert_eq!(limited.integrate_from_zero_to(100.0), 10.0);
//! ```

pub mod burst;
pub mod constant;
pub mod error;
pub mod heat;
pub mod impulse;
pub mod signal;
pub mod truncated;

pub use burst::{BurstEstimate, BurstSettings, DoubleFireBurstSignal};
pub use constant::ConstantSignal;
pub use error::{SignalError, SignalResult};
pub use heat::ExpectedHeatSignal;
pub use impulse::ImpulseTrain;
pub use signal::{ProbabilityMass, Signal, SignalSum};
pub use truncated::TruncatedSignal;
