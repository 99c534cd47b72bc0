//! Critical-hit destruction probabilities for loadout components.
//!
//! A hit on a component is either a miss or a strike of one or more
//! simultaneous critical hits, drawn from a [`CriticalStrikeProbability`]
//! table. [`ComponentDestructionSimulator`] enumerates the outcomes over the
//! number of hits the component survives and reports, per equipped item, the
//! probability it is destroyed first.

pub mod error;
pub mod simulator;
pub mod table;

pub use error::{CritError, CritResult};
pub use simulator::{
    ComponentDestructionSimulator, CritSettings, CritTarget, CritTargeting, simulate_loadout,
};
pub use table::CriticalStrikeProbability;
