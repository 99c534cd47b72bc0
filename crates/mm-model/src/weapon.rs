//! Weapon definitions and derived per-shot quantities.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::modifiers::Modifiers;
use crate::range::RangeProfile;
use crate::stat::{StatComponent, WeaponStat};

/// Broad weapon classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    Energy,
    Ballistic,
    Missile,
    /// Defensive systems (anti-missile). Never counted as offensive.
    AntiMissile,
}

/// Ghost-heat linkage of a weapon.
///
/// `group == 0` means the weapon is penalized only together with copies of
/// itself. Weapons sharing a non-zero group are penalized as one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostHeatRule {
    #[serde(default)]
    pub group: u32,
    pub max_free_alpha: u32,
    pub multiplier: f64,
}

/// Jamming behaviour of double-fire weapons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JamProfile {
    /// Probability that a firing cycle jams.
    pub probability: f64,
    /// Seconds the weapon is unusable after a jam.
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub class: WeaponClass,
    pub slots: u32,
    pub tons: f64,
    #[serde(default)]
    pub health: f64,
    pub damage_per_shot: f64,
    pub heat: f64,
    pub cooldown: f64,
    /// Beam duration for lasers, zero for instant weapons.
    #[serde(default)]
    pub duration: f64,
    pub range: RangeProfile,
    #[serde(default)]
    pub ammo_type: Option<String>,
    #[serde(default)]
    pub ghost_heat: Option<GhostHeatRule>,
    #[serde(default)]
    pub jam: Option<JamProfile>,
    /// Extra rounds a double-fire weapon can shoot during its cooldown.
    #[serde(default)]
    pub shots_during_cooldown: u32,
}

impl Weapon {
    pub fn validate(&self) -> ModelResult<()> {
        self.range.validate()?;
        let scalars = [
            self.tons,
            self.health,
            self.damage_per_shot,
            self.heat,
            self.cooldown,
            self.duration,
        ];
        if scalars.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ModelError::InvalidArg {
                what: "weapon stats must be finite and non-negative",
            });
        }
        if self.cooldown + self.duration <= 0.0 {
            return Err(ModelError::InvalidArg {
                what: "weapon firing period must be positive",
            });
        }
        if let Some(jam) = self.jam {
            if !(0.0..=1.0).contains(&jam.probability) || jam.time.is_nan() || jam.time < 0.0 {
                return Err(ModelError::InvalidArg {
                    what: "jam probability must be in [0, 1] and jam time non-negative",
                });
            }
        }
        if let Some(rule) = self.ghost_heat {
            if !rule.multiplier.is_finite() || rule.multiplier < 0.0 {
                return Err(ModelError::InvalidArg {
                    what: "ghost heat multiplier must be finite and non-negative",
                });
            }
        }
        Ok(())
    }

    pub fn is_offensive(&self) -> bool {
        self.class != WeaponClass::AntiMissile
    }

    pub fn heat_per_shot(&self, modifiers: &Modifiers) -> f64 {
        self.heat * modifiers.weapon_heat
    }

    pub fn cooldown(&self, modifiers: &Modifiers) -> f64 {
        self.cooldown * modifiers.weapon_cooldown
    }

    /// Length of one firing cycle ignoring double fire and jams.
    pub fn raw_firing_period(&self, modifiers: &Modifiers) -> f64 {
        self.cooldown(modifiers) + self.duration
    }

    pub fn can_jam(&self) -> bool {
        self.jam.is_some_and(|j| j.probability > 0.0)
    }

    pub fn can_double_fire(&self) -> bool {
        self.shots_during_cooldown > 0
    }

    pub fn jam_probability(&self, modifiers: &Modifiers) -> f64 {
        self.jam
            .map_or(0.0, |j| (j.probability * modifiers.jam_chance).clamp(0.0, 1.0))
    }

    pub fn jam_time(&self, modifiers: &Modifiers) -> f64 {
        self.jam.map_or(0.0, |j| j.time * modifiers.jam_duration)
    }

    /// Expected rounds fired per firing cycle.
    pub fn expected_rounds_per_cycle(&self, modifiers: &Modifiers) -> f64 {
        let p = self.jam_probability(modifiers);
        let rounds = f64::from(self.shots_during_cooldown + 1);
        (1.0 - p) * rounds + p
    }

    /// Expected seconds between rounds, accounting for double fire and jams.
    pub fn seconds_per_shot(&self, modifiers: &Modifiers) -> f64 {
        let p = self.jam_probability(modifiers);
        let period = self.raw_firing_period(modifiers);
        let expected_cycle = if p > 0.0 {
            period + p * self.jam_time(modifiers)
        } else {
            period
        };
        expected_cycle / self.expected_rounds_per_cycle(modifiers)
    }

    pub fn range_profile(&self, modifiers: &Modifiers) -> RangeProfile {
        self.range.scaled(modifiers.weapon_range)
    }

    pub fn range_effectiveness(&self, range: f64, modifiers: &Modifiers) -> f64 {
        self.range_profile(modifiers).effectiveness(range)
    }

    /// Evaluate a stat expression such as `d/s` for this weapon.
    pub fn stat(&self, stat: &WeaponStat, modifiers: &Modifiers) -> f64 {
        stat.evaluate(|component| match component {
            StatComponent::Damage => self.damage_per_shot,
            StatComponent::Heat => self.heat_per_shot(modifiers),
            StatComponent::Seconds => self.seconds_per_shot(modifiers),
            StatComponent::Slots => f64::from(self.slots),
            StatComponent::Tons => self.tons,
        })
    }
}
