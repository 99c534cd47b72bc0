//! Ghost heat: extra heat for firing many similar weapons at once.
//!
//! Weapons carrying a [`GhostHeatRule`] with group 0 are penalized per
//! catalog weapon type, counting duplicates of the same item. Weapons sharing
//! a non-zero group are penalized together, using the hottest weapon of the
//! group as its representative.

use std::collections::BTreeMap;

use mm_core::ItemId;
use mm_model::{EquippedWeapon, GhostHeatRule, Loadout, Modifiers, Weapon};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::metric::Metric;

/// Heat scale by number of weapons fired together.
pub const HEAT_SCALE: [f64; 13] = [
    0.0, 0.0, 0.08, 0.18, 0.30, 0.45, 0.60, 0.80, 1.10, 1.50, 2.00, 3.00, 5.00,
];

/// Scale used for counts beyond [`HEAT_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeatScaleOverflow {
    /// Repeat the last entry.
    #[default]
    Saturate,
    /// Continue the slope of the last two entries.
    Extrapolate,
}

impl HeatScaleOverflow {
    pub fn heat_scale(self, count: usize) -> f64 {
        let last = HEAT_SCALE.len() - 1;
        if count <= last {
            return HEAT_SCALE[count];
        }
        match self {
            Self::Saturate => HEAT_SCALE[last],
            Self::Extrapolate => {
                let slope = HEAT_SCALE[last] - HEAT_SCALE[last - 1];
                HEAT_SCALE[last] + slope * (count - last) as f64
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostHeatSettings {
    pub overflow: HeatScaleOverflow,
}

fn penalty(count: usize, rule: &GhostHeatRule, heat: f64, overflow: HeatScaleOverflow) -> f64 {
    let free = rule.max_free_alpha as usize;
    ((free + 1)..=count)
        .rev()
        .map(|c| overflow.heat_scale(c) * rule.multiplier * heat)
        .sum()
}

/// Total ghost heat of firing `weapons` together.
pub fn ghost_heat_penalty<'c>(
    weapons: impl IntoIterator<Item = EquippedWeapon<'c>>,
    modifiers: &Modifiers,
    settings: &GhostHeatSettings,
) -> f64 {
    let mut ungrouped: BTreeMap<ItemId, (usize, &'c Weapon, GhostHeatRule)> = BTreeMap::new();
    let mut grouped: BTreeMap<u32, (usize, &'c Weapon, GhostHeatRule)> = BTreeMap::new();

    for w in weapons {
        let Some(rule) = w.weapon.ghost_heat else {
            continue;
        };
        if rule.group == 0 {
            ungrouped.entry(w.item).or_insert((0, w.weapon, rule)).0 += 1;
            continue;
        }
        let entry = grouped.entry(rule.group).or_insert((0, w.weapon, rule));
        entry.0 += 1;
        // Strictly hotter replaces, so the first of equals stays.
        if w.weapon.heat > entry.1.heat {
            entry.1 = w.weapon;
            entry.2 = rule;
        }
    }

    let mut total = 0.0;
    for (item, (count, weapon, rule)) in &ungrouped {
        let p = penalty(*count, rule, weapon.heat_per_shot(modifiers), settings.overflow);
        trace!(%item, count, penalty = p, "ungrouped ghost heat");
        total += p;
    }
    for (group, (count, weapon, rule)) in &grouped {
        let p = penalty(*count, rule, weapon.heat_per_shot(modifiers), settings.overflow);
        trace!(group, count, representative = %weapon.name, penalty = p, "linked ghost heat");
        total += p;
    }
    debug!(
        buckets = ungrouped.len(),
        groups = grouped.len(),
        total,
        "ghost heat computed"
    );
    total
}

/// Ghost heat of an alpha strike with every equipped weapon.
#[derive(Debug, Clone, Copy)]
pub struct GhostHeat<'a> {
    loadout: &'a Loadout<'a>,
    settings: GhostHeatSettings,
}

impl<'a> GhostHeat<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self::with_settings(loadout, GhostHeatSettings::default())
    }

    pub fn with_settings(loadout: &'a Loadout<'a>, settings: GhostHeatSettings) -> Self {
        Self { loadout, settings }
    }
}

impl Metric for GhostHeat<'_> {
    fn calculate(&self) -> f64 {
        ghost_heat_penalty(
            self.loadout.weapons(),
            self.loadout.modifiers(),
            &self.settings,
        )
    }
}
