//! Damage output: alpha strike, peak DPS and heat-limited DPS.

use mm_core::EquippedId;
use mm_model::{EquippedWeapon, Loadout, WeaponStat};

use crate::heat::HeatDissipation;
use crate::metric::{Metric, RangeMetric};

/// Damage of firing every weapon once.
#[derive(Debug, Clone, Copy)]
pub struct AlphaStrike<'a> {
    loadout: &'a Loadout<'a>,
    range: Option<f64>,
}

impl<'a> AlphaStrike<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self {
            loadout,
            range: None,
        }
    }

    pub fn at_range(loadout: &'a Loadout<'a>, range: f64) -> Self {
        Self {
            loadout,
            range: Some(range),
        }
    }

    /// Damage of one volley with every weapon at full effect, whatever the
    /// range. Exceeds [`Metric::calculate`] when no single range puts every
    /// weapon at full effect.
    pub fn volley_sum(&self) -> f64 {
        self.loadout.weapons().map(|w| w.weapon.damage_per_shot).sum()
    }
}

impl RangeMetric for AlphaStrike<'_> {
    fn loadout(&self) -> &Loadout<'_> {
        self.loadout
    }

    fn fixed_range(&self) -> Option<f64> {
        self.range
    }

    fn calculate_at(&self, range: f64) -> f64 {
        let modifiers = self.loadout.modifiers();
        self.loadout
            .weapons()
            .map(|w| w.weapon.damage_per_shot * w.weapon.range_effectiveness(range, modifiers))
            .sum()
    }
}

impl Metric for AlphaStrike<'_> {
    fn calculate(&self) -> f64 {
        self.best().value
    }
}

/// Damage per second with every offensive weapon firing on cooldown.
#[derive(Debug, Clone, Copy)]
pub struct MaxDps<'a> {
    loadout: &'a Loadout<'a>,
    range: Option<f64>,
}

impl<'a> MaxDps<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self {
            loadout,
            range: None,
        }
    }

    pub fn at_range(loadout: &'a Loadout<'a>, range: f64) -> Self {
        Self {
            loadout,
            range: Some(range),
        }
    }
}

impl RangeMetric for MaxDps<'_> {
    fn loadout(&self) -> &Loadout<'_> {
        self.loadout
    }

    fn fixed_range(&self) -> Option<f64> {
        self.range
    }

    fn calculate_at(&self, range: f64) -> f64 {
        let modifiers = self.loadout.modifiers();
        let dps = WeaponStat::damage_per_second();
        self.loadout
            .weapons()
            .filter(|w| w.weapon.is_offensive())
            .map(|w| w.weapon.stat(&dps, modifiers) * w.weapon.range_effectiveness(range, modifiers))
            .sum()
    }
}

impl Metric for MaxDps<'_> {
    fn calculate(&self) -> f64 {
        self.best().value
    }
}

/// Damage per second that the heat budget can sustain.
///
/// Weapons are fired in order of range-adjusted damage per heat until the
/// budget (heat dissipation unless given) is used up; the weapon that
/// crosses the budget fires part time.
#[derive(Debug, Clone, Copy)]
pub struct MaxSustainedDps<'a> {
    loadout: &'a Loadout<'a>,
    range: Option<f64>,
    budget: Option<f64>,
}

impl<'a> MaxSustainedDps<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self {
            loadout,
            range: None,
            budget: None,
        }
    }

    pub fn at_range(loadout: &'a Loadout<'a>, range: f64) -> Self {
        Self {
            range: Some(range),
            ..Self::new(loadout)
        }
    }

    /// Use `budget` heat per second instead of the loadout's dissipation.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    fn budget(&self) -> f64 {
        self.budget
            .unwrap_or_else(|| HeatDissipation::new(self.loadout).calculate())
    }

    /// Fraction of time each offensive weapon fires at `range`, in firing
    /// priority order.
    pub fn weapon_ratios(&self, range: f64) -> Vec<(EquippedId, f64)> {
        self.plan(range)
            .into_iter()
            .map(|(w, ratio)| (w.equipped, ratio))
            .collect()
    }

    fn plan(&self, range: f64) -> Vec<(EquippedWeapon<'a>, f64)> {
        let modifiers = self.loadout.modifiers();
        let hps = WeaponStat::heat_per_second();

        let mut weapons: Vec<(EquippedWeapon<'a>, f64)> = self
            .loadout
            .weapons()
            .filter(|w| w.weapon.is_offensive())
            .map(|w| {
                let heat = w.weapon.heat_per_shot(modifiers);
                let damage = w.weapon.damage_per_shot * w.weapon.range_effectiveness(range, modifiers);
                let efficiency = if heat > 0.0 {
                    damage / heat
                } else {
                    f64::INFINITY
                };
                (w, efficiency)
            })
            .collect();
        // Stable: equally efficient weapons keep equip order.
        weapons.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut remaining = self.budget();
        let mut exhausted = false;
        weapons
            .into_iter()
            .map(|(w, _)| {
                if exhausted {
                    return (w, 0.0);
                }
                let heat = w.weapon.stat(&hps, modifiers);
                if heat <= 0.0 || heat <= remaining {
                    remaining -= heat.max(0.0);
                    (w, 1.0)
                } else {
                    exhausted = true;
                    (w, (remaining / heat).max(0.0))
                }
            })
            .collect()
    }
}

impl RangeMetric for MaxSustainedDps<'_> {
    fn loadout(&self) -> &Loadout<'_> {
        self.loadout
    }

    fn fixed_range(&self) -> Option<f64> {
        self.range
    }

    fn calculate_at(&self, range: f64) -> f64 {
        let modifiers = self.loadout.modifiers();
        let dps = WeaponStat::damage_per_second();
        self.plan(range)
            .into_iter()
            .map(|(w, ratio)| {
                ratio * w.weapon.stat(&dps, modifiers) * w.weapon.range_effectiveness(range, modifiers)
            })
            .sum()
    }
}

impl Metric for MaxSustainedDps<'_> {
    fn calculate(&self) -> f64 {
        self.best().value
    }
}
