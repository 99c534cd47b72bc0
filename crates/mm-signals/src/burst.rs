//! Expected damage of a double-firing weapon that can jam.
//!
//! Every firing cycle either completes normally or jams. The process is a
//! binary renewal tree; two paths with the same number of normal cycles `k`
//! and jams `j` start their next cycle at the same time
//! `k * cycle + j * (cycle + jam_time)`, so the tree collapses onto a
//! lattice indexed by `(k, j)`. Evaluation walks the lattice level by level
//! (`k + j` cycles completed), accumulating the expected damage of every
//! cycle that starts inside the horizon.

use mm_model::{Modifiers, Weapon};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SignalError, SignalResult};
use crate::signal::{ProbabilityMass, Signal};

/// Tuning for burst evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstSettings {
    /// Lattice nodes reached with lower probability are not expanded.
    pub probability_threshold: f64,
}

impl Default for BurstSettings {
    fn default() -> Self {
        Self {
            probability_threshold: 1.0e-12,
        }
    }
}

/// Result of evaluating the burst process up to a horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstEstimate {
    /// Expected damage delivered over `[0, t]`.
    pub damage: f64,
    /// Probability mass of branches that ran past `t` or were pruned.
    pub probability_mass: f64,
    /// Part of `probability_mass` dropped below the threshold. Bounds the
    /// damage error.
    pub pruned: f64,
    /// Number of lattice nodes expanded.
    pub expanded: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleFireBurstSignal {
    cycle: f64,
    jam_time: f64,
    jam_probability: f64,
    /// Damage of a cycle that completes without jamming.
    full_cycle_damage: f64,
    /// Damage of a jammed cycle (leading round only).
    jammed_cycle_damage: f64,
    settings: BurstSettings,
}

impl DoubleFireBurstSignal {
    pub fn new(weapon: &Weapon, modifiers: &Modifiers, range: f64) -> SignalResult<Self> {
        Self::with_settings(weapon, modifiers, range, BurstSettings::default())
    }

    pub fn with_settings(
        weapon: &Weapon,
        modifiers: &Modifiers,
        range: f64,
        settings: BurstSettings,
    ) -> SignalResult<Self> {
        if !weapon.can_jam() {
            return Err(SignalError::InvalidArg {
                what: "burst signal requires a weapon that can jam",
            });
        }
        let cycle = weapon.raw_firing_period(modifiers);
        if !(cycle > 0.0) {
            return Err(SignalError::InvalidArg {
                what: "burst signal requires a positive firing period",
            });
        }
        let jam_time = weapon.jam_time(modifiers);
        if !(jam_time >= 0.0) {
            return Err(SignalError::InvalidArg {
                what: "jam time must be non-negative",
            });
        }
        if !(settings.probability_threshold > 0.0 && settings.probability_threshold < 1.0) {
            return Err(SignalError::InvalidArg {
                what: "probability threshold must lie in (0, 1)",
            });
        }

        let round = weapon.damage_per_shot * weapon.range_effectiveness(range, modifiers);
        Ok(Self {
            cycle,
            jam_time,
            jam_probability: weapon.jam_probability(modifiers),
            full_cycle_damage: round * f64::from(weapon.shots_during_cooldown + 1),
            jammed_cycle_damage: round,
            settings,
        })
    }

    pub fn cycle(&self) -> f64 {
        self.cycle
    }

    pub fn jam_probability(&self) -> f64 {
        self.jam_probability
    }

    fn start_time(&self, normal: usize, jams: usize) -> f64 {
        let mut s = normal as f64 * self.cycle;
        // Guarded so an infinite jam time never multiplies zero.
        if jams > 0 {
            s += jams as f64 * (self.cycle + self.jam_time);
        }
        s
    }

    /// Expected damage and resolved probability mass over `[0, t]`.
    pub fn evaluate(&self, t: f64) -> BurstEstimate {
        let p = self.jam_probability;
        let q = 1.0 - p;
        let cycle_damage = q * self.full_cycle_damage + p * self.jammed_cycle_damage;

        let mut damage = 0.0;
        let mut resolved = 0.0;
        let mut pruned = 0.0;
        let mut expanded = 0usize;

        // level[i] = probability of having completed `completed - jams`
        // normal cycles and `jams = offset + i` jammed ones. Only the live
        // window of jam counts is kept.
        let mut level = vec![1.0];
        let mut offset = 0usize;
        let mut completed = 0usize;
        loop {
            let mut next = vec![0.0; level.len() + 1];
            for (i, &prob) in level.iter().enumerate() {
                if prob == 0.0 {
                    continue;
                }
                if prob < self.settings.probability_threshold {
                    pruned += prob;
                    continue;
                }
                let jams = offset + i;
                let start = self.start_time(completed - jams, jams);
                if start > t {
                    resolved += prob;
                    continue;
                }
                expanded += 1;
                damage += prob * cycle_damage;
                next[i] += prob * q;
                next[i + 1] += prob * p;
            }
            let Some(lo) = next.iter().position(|&v| v != 0.0) else {
                break;
            };
            let hi = next.iter().rposition(|&v| v != 0.0).unwrap_or(lo);
            level = next[lo..=hi].to_vec();
            offset += lo;
            completed += 1;
        }

        trace!(t, damage, resolved, pruned, expanded, "burst lattice evaluated");
        BurstEstimate {
            damage,
            probability_mass: resolved + pruned,
            pruned,
            expanded,
        }
    }
}

impl Signal for DoubleFireBurstSignal {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        self.evaluate(t).damage
    }
}

impl ProbabilityMass for DoubleFireBurstSignal {
    fn probability_mass(&self, t: f64) -> f64 {
        self.evaluate(t).probability_mass
    }
}
