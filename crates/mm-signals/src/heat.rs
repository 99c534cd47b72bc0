//! Expected heat produced by engines and weapons.

use mm_model::{Engine, Modifiers, Weapon};

use crate::constant::ConstantSignal;
use crate::error::SignalResult;
use crate::impulse::ImpulseTrain;
use crate::signal::Signal;

/// Heat accumulated by one source when fired (or run) continuously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpectedHeatSignal {
    /// Continuous heat, e.g. an engine.
    Continuous(ConstantSignal),
    /// Heat added once per firing cycle.
    Pulsed(ImpulseTrain),
}

impl ExpectedHeatSignal {
    pub fn engine(engine: &Engine) -> Self {
        Self::Continuous(ConstantSignal::new(engine.heat_per_second))
    }

    /// Heat of a weapon fired on cooldown.
    ///
    /// Weapons without heat contribute nothing regardless of their period.
    pub fn weapon(weapon: &Weapon, modifiers: &Modifiers) -> SignalResult<Self> {
        let heat = weapon.heat_per_shot(modifiers);
        if heat == 0.0 {
            return Ok(Self::Continuous(ConstantSignal::new(0.0)));
        }
        let train = ImpulseTrain::new(weapon.raw_firing_period(modifiers), heat)?;
        Ok(Self::Pulsed(train))
    }
}

impl Signal for ExpectedHeatSignal {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        match self {
            Self::Continuous(s) => s.integrate_from_zero_to(t),
            Self::Pulsed(s) => s.integrate_from_zero_to(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_model::sample;

    fn weapon(name: &str) -> Weapon {
        sample::weapons()
            .unwrap()
            .into_iter()
            .find(|w| w.name == name)
            .unwrap()
    }

    #[test]
    fn weapon_heat_pulses_each_cycle() {
        let ml = weapon("Medium Laser");
        let s = ExpectedHeatSignal::weapon(&ml, &Modifiers::none()).unwrap();
        // period = cooldown 3 + duration 1
        assert_eq!(s.integrate_from_zero_to(0.0), 4.0);
        assert_eq!(s.integrate_from_zero_to(3.9), 4.0);
        assert_eq!(s.integrate_from_zero_to(4.0), 8.0);
    }

    #[test]
    fn heat_modifier_scales_amplitude() {
        let ml = weapon("Medium Laser");
        let mods = Modifiers {
            weapon_heat: 0.5,
            ..Modifiers::none()
        };
        let s = ExpectedHeatSignal::weapon(&ml, &mods).unwrap();
        assert_eq!(s.integrate_from_zero_to(0.0), 2.0);
    }

    #[test]
    fn heatless_weapon_is_zero() {
        let ams = weapon("Anti-Missile System");
        let s = ExpectedHeatSignal::weapon(&ams, &Modifiers::none()).unwrap();
        assert_eq!(s.integrate_from_zero_to(100.0), 0.0);
    }

    #[test]
    fn engine_heat_is_continuous() {
        let catalog = sample::catalog().unwrap();
        let engine = catalog
            .iter()
            .find_map(|(_, item)| item.as_engine())
            .unwrap();
        let s = ExpectedHeatSignal::engine(engine);
        let expected = engine.heat_per_second * 10.0;
        assert!((s.integrate_from_zero_to(10.0) - expected).abs() < 1e-12);
    }
}
