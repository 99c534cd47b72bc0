//! Per-item destruction probabilities for one component.

use std::collections::HashMap;

use mm_core::{EquippedId, binomial};
use mm_model::{Loadout, Location};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CritError, CritResult};
use crate::table::CriticalStrikeProbability;

/// How critical hits pick the item they land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CritTargeting {
    /// The front alive item in slot order takes hits first, up to its slot
    /// count per strike.
    #[default]
    SlotOrder,
    /// Each critical hit picks an item with probability proportional to its
    /// slot count. Items are evaluated independently.
    SlotWeighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CritSettings {
    /// Structure damage of one component hit; bounds the number of hits.
    pub damage_per_hit: f64,
    /// Damage dealt to an item by one critical hit.
    pub crit_damage: f64,
    pub targeting: CritTargeting,
    pub table: CriticalStrikeProbability,
}

impl Default for CritSettings {
    fn default() -> Self {
        Self {
            damage_per_hit: 10.0,
            crit_damage: 10.0,
            targeting: CritTargeting::default(),
            table: CriticalStrikeProbability::default(),
        }
    }
}

impl CritSettings {
    pub fn validate(&self) -> CritResult<()> {
        if !(self.damage_per_hit > 0.0 && self.damage_per_hit.is_finite()) {
            return Err(CritError::InvalidArg {
                what: "damage per hit must be positive and finite",
            });
        }
        if !(self.crit_damage > 0.0 && self.crit_damage.is_finite()) {
            return Err(CritError::InvalidArg {
                what: "critical damage must be positive and finite",
            });
        }
        Ok(())
    }
}

/// An item occupying critical slots of a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CritTarget {
    pub id: EquippedId,
    /// Non-positive health marks the item indestructible.
    pub health: f64,
    pub slots: u32,
}

impl CritTarget {
    fn hits_to_destroy(&self, crit_damage: f64) -> Option<u32> {
        (self.health > 0.0).then(|| (self.health / crit_damage).ceil() as u32)
    }
}

/// Single-use simulator for one component.
///
/// Construct, call [`simulate`](Self::simulate), then read probabilities.
#[derive(Debug, Clone)]
pub struct ComponentDestructionSimulator {
    component_hp: f64,
    items: Vec<CritTarget>,
    settings: CritSettings,
    shots: Option<u32>,
    destroyed: Option<Vec<f64>>,
}

impl ComponentDestructionSimulator {
    /// `items` must be in slot order.
    pub fn new(component_hp: f64, items: Vec<CritTarget>) -> CritResult<Self> {
        if !(component_hp >= 0.0 && component_hp.is_finite()) {
            return Err(CritError::InvalidArg {
                what: "component hit points must be finite and non-negative",
            });
        }
        if items.iter().any(|i| !i.health.is_finite()) {
            return Err(CritError::InvalidArg {
                what: "item health must be finite",
            });
        }
        Ok(Self {
            component_hp,
            items,
            settings: CritSettings::default(),
            shots: None,
            destroyed: None,
        })
    }

    /// Simulator for the items equipped at `location`.
    pub fn from_component(loadout: &Loadout<'_>, location: Location) -> CritResult<Self> {
        let component = loadout
            .component(location)
            .ok_or(CritError::MissingLocation { location })?;
        let items = loadout
            .component_items(location)
            .map(|(id, item)| CritTarget {
                id,
                health: item.health(),
                slots: item.slots(),
            })
            .collect();
        Self::new(component.internal_hp, items)
    }

    /// Simulate exactly `shots` component hits.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self.destroyed = None;
        self
    }

    pub fn with_settings(mut self, settings: CritSettings) -> CritResult<Self> {
        settings.validate()?;
        self.settings = settings;
        self.destroyed = None;
        Ok(self)
    }

    pub fn items(&self) -> &[CritTarget] {
        &self.items
    }

    /// Number of component hits simulated.
    pub fn shots(&self) -> u32 {
        self.shots
            .unwrap_or_else(|| (self.component_hp / self.settings.damage_per_hit).ceil() as u32)
    }

    pub fn is_simulated(&self) -> bool {
        self.destroyed.is_some()
    }

    /// Populate destruction probabilities. Repeated calls are no-ops.
    pub fn simulate(&mut self) {
        if self.destroyed.is_some() {
            return;
        }
        let shots = self.shots();
        let needed: Vec<Option<u32>> = self
            .items
            .iter()
            .map(|i| i.hits_to_destroy(self.settings.crit_damage))
            .collect();
        let destroyed = match self.settings.targeting {
            CritTargeting::SlotOrder => self.slot_order(shots, &needed),
            CritTargeting::SlotWeighted => self.slot_weighted(shots, &needed),
        };
        debug!(
            shots,
            items = self.items.len(),
            targeting = ?self.settings.targeting,
            "component destruction simulated"
        );
        self.destroyed = Some(destroyed);
    }

    /// Destruction probability of `id`, `None` before simulation or for
    /// items not in this component.
    pub fn probability(&self, id: EquippedId) -> Option<f64> {
        let destroyed = self.destroyed.as_ref()?;
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(destroyed[index])
    }

    /// All `(item, probability)` pairs in slot order; empty before simulation.
    pub fn probabilities(&self) -> impl Iterator<Item = (EquippedId, f64)> + '_ {
        self.items
            .iter()
            .zip(self.destroyed.iter().flatten())
            .map(|(item, &p)| (item.id, p))
    }

    fn slot_order(&self, shots: u32, needed: &[Option<u32>]) -> Vec<f64> {
        // State: critical hits absorbed per item, capped at the lethal count.
        let mut states: HashMap<Vec<u32>, f64> = HashMap::new();
        states.insert(vec![0; self.items.len()], 1.0);

        for shot in 0..shots {
            let mut next: HashMap<Vec<u32>, f64> = HashMap::with_capacity(states.len());
            for (state, &prob) in &states {
                for (crits, p) in self.settings.table.outcomes() {
                    let after = self.apply_strike(state, crits as u32, needed);
                    *next.entry(after).or_insert(0.0) += prob * p;
                }
            }
            trace!(shot, states = next.len(), "strike layer merged");
            states = next;
        }

        let mut destroyed = vec![0.0; self.items.len()];
        for (state, prob) in &states {
            for (i, &hits) in state.iter().enumerate() {
                if needed[i].is_some_and(|n| hits >= n) {
                    destroyed[i] += prob;
                }
            }
        }
        destroyed
    }

    fn apply_strike(&self, state: &[u32], crits: u32, needed: &[Option<u32>]) -> Vec<u32> {
        let mut after = state.to_vec();
        let mut remaining = crits;
        for (i, item) in self.items.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            let Some(lethal) = needed[i] else {
                continue;
            };
            // Destroyed items no longer absorb hits.
            let absorbed = remaining.min(item.slots).min(lethal - after[i]);
            after[i] += absorbed;
            remaining -= absorbed;
        }
        after
    }

    fn slot_weighted(&self, shots: u32, needed: &[Option<u32>]) -> Vec<f64> {
        let total_slots: u32 = self
            .items
            .iter()
            .zip(needed)
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| i.slots)
            .sum();
        if total_slots == 0 {
            return vec![0.0; self.items.len()];
        }

        self.items
            .iter()
            .zip(needed)
            .map(|(item, lethal)| {
                let Some(lethal) = *lethal else {
                    return 0.0;
                };
                let w = f64::from(item.slots) / f64::from(total_slots);
                let per_shot = self.hits_on_item(w);

                let mut dist = vec![0.0; lethal as usize + 1];
                dist[0] = 1.0;
                for _ in 0..shots {
                    let mut next = vec![0.0; dist.len()];
                    for (have, &p_have) in dist.iter().enumerate() {
                        for (m, &p_m) in per_shot.iter().enumerate() {
                            next[(have + m).min(lethal as usize)] += p_have * p_m;
                        }
                    }
                    dist = next;
                }
                dist[lethal as usize]
            })
            .collect()
    }

    /// Distribution of critical hits landing on an item of slot weight `w`
    /// for one component hit.
    fn hits_on_item(&self, w: f64) -> Vec<f64> {
        let table = &self.settings.table;
        let mut dist = vec![0.0; table.max_crits() + 1];
        for (crits, p) in table.outcomes() {
            for m in 0..=crits {
                let k = (crits - m) as i32;
                dist[m] += p
                    * binomial(crits as u32, m as u32)
                    * w.powi(m as i32)
                    * (1.0 - w).powi(k);
            }
        }
        dist
    }
}

/// Destruction probabilities for every item of every component, evaluated
/// in parallel.
pub fn simulate_loadout(
    loadout: &Loadout<'_>,
    settings: &CritSettings,
) -> CritResult<HashMap<EquippedId, f64>> {
    settings.validate()?;
    let per_component = loadout
        .components()
        .par_iter()
        .map(|component| {
            let mut sim = ComponentDestructionSimulator::from_component(loadout, component.location)?
                .with_settings(settings.clone())?;
            sim.simulate();
            Ok(sim.probabilities().collect::<Vec<_>>())
        })
        .collect::<CritResult<Vec<_>>>()?;
    Ok(per_component.into_iter().flatten().collect())
}
