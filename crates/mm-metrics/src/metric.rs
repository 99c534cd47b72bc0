//! Metric contracts.

use mm_model::Loadout;
use serde::{Deserialize, Serialize};

use crate::range::weapon_ranges;

/// A derived statistic of a loadout.
pub trait Metric {
    fn calculate(&self) -> f64;
}

/// Value of a range metric and the distance that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOutcome {
    pub range: f64,
    pub value: f64,
}

/// A metric that depends on the distance to the target.
pub trait RangeMetric {
    fn loadout(&self) -> &Loadout<'_>;

    /// Distance the metric is pinned to, if any.
    fn fixed_range(&self) -> Option<f64>;

    fn calculate_at(&self, range: f64) -> f64;

    /// Value at the fixed range, or the maximum over all weapon range
    /// breakpoints. Ties resolve to the longer range.
    fn best(&self) -> RangeOutcome {
        if let Some(range) = self.fixed_range() {
            return RangeOutcome {
                range,
                value: self.calculate_at(range),
            };
        }
        let mut best = RangeOutcome {
            range: 0.0,
            value: f64::NEG_INFINITY,
        };
        for range in weapon_ranges(self.loadout()) {
            let value = self.calculate_at(range);
            if value >= best.value {
                best = RangeOutcome { range, value };
            }
        }
        best
    }
}
