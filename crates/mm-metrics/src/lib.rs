//! Derived loadout statistics.
//!
//! Every metric is a small value bound to a [`Loadout`](mm_model::Loadout)
//! (and, for composite metrics, to the metrics it combines). Nothing is
//! cached: [`Metric::calculate`] recomputes from the loadout on every call.
//!
//! Range-dependent metrics implement [`RangeMetric`]. Without a fixed range
//! they report the best value over every weapon range breakpoint.

pub mod dps;
pub mod ghost_heat;
pub mod heat;
pub mod metric;
pub mod mobility;
pub mod over_time;
pub mod range;

pub use dps::{AlphaStrike, MaxDps, MaxSustainedDps};
pub use ghost_heat::{
    GhostHeat, GhostHeatSettings, HEAT_SCALE, HeatScaleOverflow, ghost_heat_penalty,
};
pub use heat::{
    CoolingRatio, HeatCapacity, HeatDissipation, HeatGeneration, HeatSettings, HeatSinkConstants,
    TimeToOverheat,
};
pub use metric::{Metric, RangeMetric, RangeOutcome};
pub use mobility::{JumpDistance, PayloadCapacity, TopSpeed};
pub use over_time::{BurstDamageOverTime, HeatOverTime};
pub use range::weapon_ranges;
