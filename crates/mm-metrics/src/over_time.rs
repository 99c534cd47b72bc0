//! Heat and damage accumulated after a given time of continuous fire.

use mm_core::MmResult;
use mm_model::{Loadout, Modifiers, Weapon};
use mm_signals::{
    DoubleFireBurstSignal, ExpectedHeatSignal, ImpulseTrain, Signal, SignalSum, TruncatedSignal,
};

use crate::ghost_heat::{GhostHeatSettings, ghost_heat_penalty};
use crate::metric::{Metric, RangeMetric};

/// Heat generated over `[0, time]` with every weapon on cooldown.
///
/// With ghost heat enabled the penalty of the opening alpha strike is added
/// at `t = 0`.
pub struct HeatOverTime {
    signals: SignalSum,
    time: f64,
}

impl HeatOverTime {
    pub fn new(loadout: &Loadout<'_>, time: f64) -> MmResult<Self> {
        Self::build(loadout, time, None)
    }

    pub fn with_ghost_heat(
        loadout: &Loadout<'_>,
        time: f64,
        settings: GhostHeatSettings,
    ) -> MmResult<Self> {
        Self::build(loadout, time, Some(settings))
    }

    fn build(
        loadout: &Loadout<'_>,
        time: f64,
        ghost_heat: Option<GhostHeatSettings>,
    ) -> MmResult<Self> {
        let modifiers = loadout.modifiers();
        let mut signals = SignalSum::new();
        if let Some(engine) = loadout.engine() {
            signals.push(ExpectedHeatSignal::engine(engine));
        }
        for w in loadout.weapons() {
            signals.push(ExpectedHeatSignal::weapon(w.weapon, modifiers)?);
        }
        if let Some(settings) = ghost_heat {
            let penalty = ghost_heat_penalty(loadout.weapons(), modifiers, &settings);
            signals.push(ImpulseTrain::new(f64::INFINITY, penalty)?);
        }
        Ok(Self { signals, time })
    }

    /// Heat accumulated up to `t`.
    pub fn at(&self, t: f64) -> f64 {
        self.signals.integrate_from_zero_to(t)
    }
}

impl Metric for HeatOverTime {
    fn calculate(&self) -> f64 {
        self.at(self.time)
    }
}

/// Damage of one weapon at full effectiveness; range scaling is applied at
/// evaluation.
struct WeaponDamage<'a> {
    weapon: &'a Weapon,
    signal: Box<dyn Signal>,
}

/// Damage dealt over `[0, time]` with every offensive weapon on cooldown.
///
/// Jamming weapons use the expected burst process. Weapons that use
/// ammunition stop once their share of the carried rounds is spent; weapons
/// sharing an ammo type split its rounds evenly.
pub struct BurstDamageOverTime<'a> {
    loadout: &'a Loadout<'a>,
    time: f64,
    range: Option<f64>,
    parts: Vec<WeaponDamage<'a>>,
}

impl<'a> BurstDamageOverTime<'a> {
    pub fn new(loadout: &'a Loadout<'a>, time: f64) -> MmResult<Self> {
        Self::build(loadout, time, None)
    }

    pub fn at_range(loadout: &'a Loadout<'a>, time: f64, range: f64) -> MmResult<Self> {
        Self::build(loadout, time, Some(range))
    }

    fn build(loadout: &'a Loadout<'a>, time: f64, range: Option<f64>) -> MmResult<Self> {
        let modifiers = loadout.modifiers();
        let weapons: Vec<&'a Weapon> = loadout
            .weapons()
            .map(|w| w.weapon)
            .filter(|w| w.is_offensive())
            .collect();

        let mut parts = Vec::with_capacity(weapons.len());
        for &weapon in &weapons {
            let signal = match &weapon.ammo_type {
                None => full_damage_signal(weapon, modifiers)?,
                Some(ammo) => {
                    let sharing = weapons
                        .iter()
                        .filter(|w| w.ammo_type.as_ref() == Some(ammo))
                        .count();
                    let volleys = f64::from(loadout.ammo_rounds(ammo)) / sharing as f64;
                    let cycles = (volleys / weapon.expected_rounds_per_cycle(modifiers)).floor();
                    if cycles < 1.0 {
                        continue;
                    }
                    // Midway through the last cycle, clear of its boundaries.
                    let cutoff = (cycles - 0.5) * expected_cycle(weapon, modifiers);
                    Box::new(TruncatedSignal::new(
                        full_damage_signal(weapon, modifiers)?,
                        cutoff,
                    ))
                }
            };
            parts.push(WeaponDamage { weapon, signal });
        }
        Ok(Self {
            loadout,
            time,
            range,
            parts,
        })
    }

    /// Damage accumulated up to `t` at `range`.
    pub fn at(&self, t: f64, range: f64) -> f64 {
        let modifiers = self.loadout.modifiers();
        self.parts
            .iter()
            .map(|p| p.weapon.range_effectiveness(range, modifiers) * p.signal.integrate_from_zero_to(t))
            .sum()
    }
}

fn expected_cycle(weapon: &Weapon, modifiers: &Modifiers) -> f64 {
    weapon.raw_firing_period(modifiers)
        + weapon.jam_probability(modifiers) * weapon.jam_time(modifiers)
}

fn full_damage_signal(weapon: &Weapon, modifiers: &Modifiers) -> MmResult<Box<dyn Signal>> {
    if weapon.can_jam() {
        // `long` sits inside the full-effect band of every valid profile.
        let range = weapon.range_profile(modifiers).long;
        return Ok(Box::new(DoubleFireBurstSignal::new(weapon, modifiers, range)?));
    }
    let volley = weapon.damage_per_shot * f64::from(weapon.shots_during_cooldown + 1);
    Ok(Box::new(ImpulseTrain::new(
        weapon.raw_firing_period(modifiers),
        volley,
    )?))
}

impl RangeMetric for BurstDamageOverTime<'_> {
    fn loadout(&self) -> &Loadout<'_> {
        self.loadout
    }

    fn fixed_range(&self) -> Option<f64> {
        self.range
    }

    fn calculate_at(&self, range: f64) -> f64 {
        self.at(self.time, range)
    }
}

impl Metric for BurstDamageOverTime<'_> {
    fn calculate(&self) -> f64 {
        self.best().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_model::{Catalog, LoadoutBuilder, Location, sample};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn loadout<'c>(catalog: &'c Catalog, items: &[(&str, Location)]) -> Loadout<'c> {
        let mut b = LoadoutBuilder::new(catalog, sample::medium_chassis()).unwrap();
        for (name, loc) in items {
            b.equip_named(*loc, name).unwrap();
        }
        b.build()
    }

    #[test]
    fn heat_over_time_sums_engine_and_weapons() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(
            &catalog,
            &[
                ("STD 250", Location::CenterTorso),
                ("PPC", Location::LeftArm),
                ("Medium Laser", Location::RightArm),
            ],
        );
        let heat = HeatOverTime::new(&l, 8.0).unwrap();
        assert!(close(heat.calculate(), 0.2 * 8.0 + 3.0 * 10.0 + 3.0 * 4.0));
        assert!(close(heat.at(0.0), 14.0));
    }

    #[test]
    fn ghost_heat_added_once() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(
            &catalog,
            &[
                ("PPC", Location::LeftArm),
                ("PPC", Location::RightArm),
                ("PPC", Location::LeftTorso),
            ],
        );
        let plain = HeatOverTime::new(&l, 10.0).unwrap();
        let ghost = HeatOverTime::with_ghost_heat(&l, 10.0, GhostHeatSettings::default()).unwrap();
        assert!(close(ghost.calculate() - plain.calculate(), 1.8));
    }

    #[test]
    fn energy_damage_never_runs_out() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(&catalog, &[("Medium Laser", Location::RightArm)]);
        let burst = BurstDamageOverTime::at_range(&l, 100.0, 200.0).unwrap();
        // Volleys at 0, 4, ..., 100.
        assert!(close(burst.calculate(), 26.0 * 5.0));
    }

    #[test]
    fn ammo_limits_damage() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(
            &catalog,
            &[
                ("AC/5", Location::RightTorso),
                ("AC/5 Ammo", Location::LeftTorso),
            ],
        );
        let burst = BurstDamageOverTime::at_range(&l, 1000.0, 100.0).unwrap();
        assert!(close(burst.calculate(), 30.0 * 5.0));
    }

    #[test]
    fn shared_ammo_is_split() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(
            &catalog,
            &[
                ("AC/5", Location::RightTorso),
                ("AC/5", Location::RightArm),
                ("AC/5 Ammo", Location::LeftTorso),
            ],
        );
        let burst = BurstDamageOverTime::at_range(&l, 1000.0, 100.0).unwrap();
        assert!(close(burst.calculate(), 30.0 * 5.0));
        // Both guns fire 15 volleys each; after 5 s each has fired 4.
        assert!(close(burst.at(5.0, 100.0), 2.0 * 4.0 * 5.0));
    }

    #[test]
    fn no_ammo_no_damage() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(&catalog, &[("AC/5", Location::RightTorso)]);
        let burst = BurstDamageOverTime::new(&l, 10.0).unwrap();
        assert_eq!(burst.calculate(), 0.0);
    }

    #[test]
    fn jamming_weapon_uses_burst_process() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(
            &catalog,
            &[
                ("Ultra AC/5", Location::RightTorso),
                ("UAC/5 Ammo", Location::LeftTorso),
            ],
        );
        let w = catalog.weapon(catalog.find("Ultra AC/5").unwrap()).unwrap();
        let direct = DoubleFireBurstSignal::new(w, &Modifiers::none(), 0.0).unwrap();
        let burst = BurstDamageOverTime::at_range(&l, 3.0, 0.0).unwrap();
        assert!(close(burst.calculate(), direct.integrate_from_zero_to(3.0)));
        assert!(burst.calculate() > 0.0);
    }

    #[test]
    fn best_range_reported() {
        let catalog = sample::catalog().unwrap();
        let l = loadout(&catalog, &[("PPC", Location::LeftArm)]);
        let burst = BurstDamageOverTime::new(&l, 10.0).unwrap();
        let best = burst.best();
        assert_eq!(best.range, 540.0);
        assert!(close(best.value, 30.0));
    }
}
