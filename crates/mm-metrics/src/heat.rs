//! Heat economy: capacity, dissipation, generation and what follows from
//! them.

use mm_model::{Loadout, WeaponStat};
use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Per-heat-sink contributions for one heat-sink technology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatSinkConstants {
    pub engine_capacity: f64,
    pub external_capacity: f64,
    pub engine_dissipation: f64,
    pub external_dissipation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatSettings {
    /// Capacity of a chassis without heat sinks.
    pub base_capacity: f64,
    /// Overheat times at or beyond this many seconds count as never.
    pub overheat_horizon: f64,
    pub single: HeatSinkConstants,
    pub double: HeatSinkConstants,
}

impl Default for HeatSettings {
    fn default() -> Self {
        Self {
            base_capacity: 30.0,
            overheat_horizon: 900.0,
            single: HeatSinkConstants {
                engine_capacity: 1.0,
                external_capacity: 1.0,
                engine_dissipation: 0.1,
                external_dissipation: 0.1,
            },
            double: HeatSinkConstants {
                engine_capacity: 2.0,
                external_capacity: 1.4,
                engine_dissipation: 0.2,
                external_dissipation: 0.14,
            },
        }
    }
}

impl HeatSettings {
    fn sinks(&self, loadout: &Loadout<'_>) -> &HeatSinkConstants {
        if loadout.upgrades().double_heat_sinks {
            &self.double
        } else {
            &self.single
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HeatCapacity<'a> {
    loadout: &'a Loadout<'a>,
    settings: HeatSettings,
}

impl<'a> HeatCapacity<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self::with_settings(loadout, HeatSettings::default())
    }

    pub fn with_settings(loadout: &'a Loadout<'a>, settings: HeatSettings) -> Self {
        Self { loadout, settings }
    }
}

impl Metric for HeatCapacity<'_> {
    fn calculate(&self) -> f64 {
        let l = self.loadout;
        let k = self.settings.sinks(l);
        let capacity = self.settings.base_capacity
            + f64::from(l.engine_heat_sinks()) * k.engine_capacity
            + f64::from(l.heat_sink_count()) * k.external_capacity;
        capacity * l.modifiers().heat_capacity
    }
}

/// Heat removed per second.
#[derive(Debug, Clone, Copy)]
pub struct HeatDissipation<'a> {
    loadout: &'a Loadout<'a>,
    settings: HeatSettings,
}

impl<'a> HeatDissipation<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self::with_settings(loadout, HeatSettings::default())
    }

    pub fn with_settings(loadout: &'a Loadout<'a>, settings: HeatSettings) -> Self {
        Self { loadout, settings }
    }
}

impl Metric for HeatDissipation<'_> {
    fn calculate(&self) -> f64 {
        let l = self.loadout;
        let k = self.settings.sinks(l);
        let dissipation = f64::from(l.engine_heat_sinks()) * k.engine_dissipation
            + f64::from(l.heat_sink_count()) * k.external_dissipation;
        dissipation * l.modifiers().heat_dissipation
    }
}

/// Heat produced per second with every weapon firing on cooldown.
#[derive(Debug, Clone, Copy)]
pub struct HeatGeneration<'a> {
    loadout: &'a Loadout<'a>,
}

impl<'a> HeatGeneration<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self { loadout }
    }
}

impl Metric for HeatGeneration<'_> {
    fn calculate(&self) -> f64 {
        let l = self.loadout;
        let hps = WeaponStat::heat_per_second();
        let engine = l.engine().map_or(0.0, |e| e.heat_per_second);
        let weapons: f64 = l
            .weapons()
            .map(|w| w.weapon.stat(&hps, l.modifiers()))
            .sum();
        engine + weapons
    }
}

/// Dissipation over generation; 1.0 when nothing generates heat.
#[derive(Debug, Clone, Copy)]
pub struct CoolingRatio<'a> {
    dissipation: HeatDissipation<'a>,
    generation: HeatGeneration<'a>,
}

impl<'a> CoolingRatio<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self::from_metrics(HeatDissipation::new(loadout), HeatGeneration::new(loadout))
    }

    pub fn from_metrics(dissipation: HeatDissipation<'a>, generation: HeatGeneration<'a>) -> Self {
        Self {
            dissipation,
            generation,
        }
    }
}

impl Metric for CoolingRatio<'_> {
    fn calculate(&self) -> f64 {
        let generation = self.generation.calculate();
        if generation <= 0.0 {
            return 1.0;
        }
        self.dissipation.calculate() / generation
    }
}

/// Seconds of continuous fire before the heat capacity is exhausted.
///
/// Infinite when dissipation keeps up or when the result reaches the
/// overheat horizon.
#[derive(Debug, Clone, Copy)]
pub struct TimeToOverheat<'a> {
    capacity: HeatCapacity<'a>,
    dissipation: HeatDissipation<'a>,
    generation: HeatGeneration<'a>,
    horizon: f64,
}

impl<'a> TimeToOverheat<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self::with_settings(loadout, HeatSettings::default())
    }

    pub fn with_settings(loadout: &'a Loadout<'a>, settings: HeatSettings) -> Self {
        Self {
            capacity: HeatCapacity::with_settings(loadout, settings),
            dissipation: HeatDissipation::with_settings(loadout, settings),
            generation: HeatGeneration::new(loadout),
            horizon: settings.overheat_horizon,
        }
    }
}

impl Metric for TimeToOverheat<'_> {
    fn calculate(&self) -> f64 {
        let differential = self.generation.calculate() - self.dissipation.calculate();
        if differential <= 0.0 {
            return f64::INFINITY;
        }
        let t = self.capacity.calculate() / differential;
        if t >= self.horizon { f64::INFINITY } else { t }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_model::{Catalog, LoadoutBuilder, Location, Modifiers, Upgrades, sample};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn builder(catalog: &Catalog, upgrades: Upgrades) -> LoadoutBuilder<'_> {
        LoadoutBuilder::new(catalog, sample::medium_chassis())
            .unwrap()
            .with_upgrades(upgrades)
    }

    #[test]
    fn single_heat_sinks() {
        let catalog = sample::catalog().unwrap();
        let mut b = builder(&catalog, Upgrades::default());
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        for _ in 0..4 {
            b.equip_named(Location::LeftTorso, "Heat Sink").unwrap();
        }
        let loadout = b.build();
        assert!(close(HeatCapacity::new(&loadout).calculate(), 30.0 + 10.0 + 4.0));
        assert!(close(HeatDissipation::new(&loadout).calculate(), 1.0 + 0.4));
    }

    #[test]
    fn double_heat_sinks() {
        let catalog = sample::catalog().unwrap();
        let upgrades = Upgrades {
            double_heat_sinks: true,
            ..Upgrades::default()
        };
        let mut b = builder(&catalog, upgrades);
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        b.equip_named(Location::LeftTorso, "Double Heat Sink").unwrap();
        b.equip_named(Location::LeftTorso, "Double Heat Sink").unwrap();
        let loadout = b.build();
        assert!(close(HeatCapacity::new(&loadout).calculate(), 30.0 + 20.0 + 2.8));
        assert!(close(HeatDissipation::new(&loadout).calculate(), 2.0 + 0.28));
    }

    #[test]
    fn modifiers_scale_capacity_and_dissipation() {
        let catalog = sample::catalog().unwrap();
        let mut b = builder(&catalog, Upgrades::default()).with_modifiers(Modifiers {
            heat_capacity: 1.1,
            heat_dissipation: 1.2,
            ..Modifiers::none()
        });
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        let loadout = b.build();
        assert!(close(HeatCapacity::new(&loadout).calculate(), 40.0 * 1.1));
        assert!(close(HeatDissipation::new(&loadout).calculate(), 1.0 * 1.2));
    }

    #[test]
    fn cooling_ratio_without_heat_is_one() {
        let catalog = sample::catalog().unwrap();
        let loadout = builder(&catalog, Upgrades::default()).build();
        assert_eq!(HeatGeneration::new(&loadout).calculate(), 0.0);
        assert_eq!(CoolingRatio::new(&loadout).calculate(), 1.0);
        assert_eq!(TimeToOverheat::new(&loadout).calculate(), f64::INFINITY);
    }

    #[test]
    fn hot_loadout_overheats() {
        let catalog = sample::catalog().unwrap();
        let mut b = builder(&catalog, Upgrades::default());
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        b.equip_named(Location::LeftArm, "PPC").unwrap();
        b.equip_named(Location::RightArm, "PPC").unwrap();
        let loadout = b.build();
        // Engine 0.2 + two PPCs at 10 heat per 4 s.
        let generation = HeatGeneration::new(&loadout).calculate();
        assert!(close(generation, 0.2 + 5.0));
        assert!(close(CoolingRatio::new(&loadout).calculate(), 1.0 / 5.2));
        let t = TimeToOverheat::new(&loadout).calculate();
        assert!(close(t, 40.0 / (5.2 - 1.0)));
    }

    #[test]
    fn overheat_beyond_horizon_counts_as_never() {
        let catalog = sample::catalog().unwrap();
        let mut b = builder(&catalog, Upgrades::default());
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        b.equip_named(Location::LeftArm, "PPC").unwrap();
        b.equip_named(Location::RightArm, "PPC").unwrap();
        let loadout = b.build();
        let settings = HeatSettings {
            overheat_horizon: 5.0,
            ..HeatSettings::default()
        };
        // About 9.5 s to overheat, past the 5 s horizon.
        assert_eq!(
            TimeToOverheat::with_settings(&loadout, settings).calculate(),
            f64::INFINITY
        );
    }

    #[test]
    fn default_horizon_is_nine_hundred_seconds() {
        let catalog = sample::catalog().unwrap();
        // No engine: generation is exactly 10 / 4 and dissipation is zero.
        let overheat_at = |capacity_scale: f64| {
            let mut b = builder(&catalog, Upgrades::default()).with_modifiers(Modifiers {
                heat_capacity: capacity_scale,
                ..Modifiers::none()
            });
            b.equip_named(Location::LeftArm, "PPC").unwrap();
            let loadout = b.build();
            TimeToOverheat::new(&loadout).calculate()
        };
        // 30 * 75 / 2.5 = 900 exactly.
        assert_eq!(overheat_at(75.0), f64::INFINITY);
        // 30 * 74 / 2.5 = 888.
        assert!(close(overheat_at(74.0), 888.0));
    }
}

