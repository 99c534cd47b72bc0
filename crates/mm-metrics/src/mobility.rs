//! Speed, jump capability and free tonnage.

use mm_core::units::{self, Length, Velocity, constants::g0};
use mm_model::Loadout;

use crate::metric::Metric;

/// Top speed in km/h.
#[derive(Debug, Clone, Copy)]
pub struct TopSpeed<'a> {
    loadout: &'a Loadout<'a>,
}

impl<'a> TopSpeed<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self { loadout }
    }

    /// Zero without an engine.
    pub fn speed(&self) -> Velocity {
        let l = self.loadout;
        let chassis = l.chassis();
        let rating = l.engine().map_or(0.0, |e| f64::from(e.rating));
        units::kph(rating * chassis.speed_factor / chassis.max_tons * l.modifiers().speed)
    }
}

impl Metric for TopSpeed<'_> {
    fn calculate(&self) -> f64 {
        units::in_kph(self.speed())
    }
}

/// Height reached by a full jump-jet burn, in metres.
///
/// The jets accelerate the chassis against gravity for their burn time; the
/// vehicle then coasts upward until its vertical speed is spent.
#[derive(Debug, Clone, Copy)]
pub struct JumpDistance<'a> {
    loadout: &'a Loadout<'a>,
}

impl<'a> JumpDistance<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self { loadout }
    }

    pub fn height(&self) -> Length {
        let l = self.loadout;
        let Some((jet, count)) = l.jump_jets() else {
            return units::m(0.0);
        };
        let thrust = units::kn(jet.thrust_kn) * (f64::from(count) * l.modifiers().jump);
        let mass = units::tonnes(l.chassis().max_tons);
        let g = g0();
        let accel = thrust / mass - g;
        if accel.value <= 0.0 {
            return units::m(0.0);
        }
        let burn = units::s(jet.burn_time);
        let speed: Velocity = accel * burn;
        let powered: Length = accel * burn * burn * 0.5;
        let coast: Length = speed * speed / (g * 2.0);
        powered + coast
    }
}

impl Metric for JumpDistance<'_> {
    fn calculate(&self) -> f64 {
        units::in_m(self.height())
    }
}

/// Tonnage left for equipment after structure, engine and armor.
#[derive(Debug, Clone, Copy)]
pub struct PayloadCapacity<'a> {
    loadout: &'a Loadout<'a>,
}

impl<'a> PayloadCapacity<'a> {
    pub fn new(loadout: &'a Loadout<'a>) -> Self {
        Self { loadout }
    }
}

impl Metric for PayloadCapacity<'_> {
    fn calculate(&self) -> f64 {
        let l = self.loadout;
        let engine = l.engine().map_or(0.0, |e| e.tons);
        l.chassis().max_tons - l.structure_mass() - engine - l.armor_mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::units::constants::G0_MPS2;
    use mm_model::{LoadoutBuilder, Location, Modifiers, Upgrades, sample};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn top_speed_from_rating() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis())
            .unwrap()
            .with_modifiers(Modifiers {
                speed: 1.1,
                ..Modifiers::none()
            });
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        let loadout = b.build();
        assert!(close(TopSpeed::new(&loadout).calculate(), 250.0 * 16.2 / 50.0 * 1.1));
    }

    #[test]
    fn no_engine_no_speed() {
        let catalog = sample::catalog().unwrap();
        let loadout = LoadoutBuilder::new(&catalog, sample::medium_chassis())
            .unwrap()
            .build();
        assert_eq!(TopSpeed::new(&loadout).calculate(), 0.0);
    }

    #[test]
    fn jump_height_from_thrust() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
        for _ in 0..4 {
            b.equip_named(Location::LeftLeg, "Jump Jet - Class IV").unwrap();
        }
        let loadout = b.build();
        // 4 x 200 kN on 50 t: 16 m/s^2 minus gravity.
        let a = 800_000.0 / 50_000.0 - G0_MPS2;
        let t = 1.5;
        let v = a * t;
        let expected = 0.5 * a * t * t + v * v / (2.0 * G0_MPS2);
        assert!(close(JumpDistance::new(&loadout).calculate(), expected));
    }

    #[test]
    fn weak_jets_do_not_lift() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
        b.equip_named(Location::LeftLeg, "Jump Jet - Class IV").unwrap();
        let loadout = b.build();
        // 200 kN on 50 t is 4 m/s^2, below gravity.
        assert_eq!(JumpDistance::new(&loadout).calculate(), 0.0);
    }

    #[test]
    fn payload_honours_upgrades() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis())
            .unwrap()
            .with_upgrades(Upgrades {
                endo_steel: true,
                ferro_fibrous: true,
                ..Upgrades::default()
            });
        b.equip_named(Location::CenterTorso, "STD 250").unwrap();
        b.set_armor(Location::CenterTorso, 71.68).unwrap();
        let loadout = b.build();
        // 50 - 2.5 structure - 12.5 engine - 2 armor.
        assert!(close(PayloadCapacity::new(&loadout).calculate(), 33.0));
    }
}
