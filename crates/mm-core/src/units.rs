//! SI quantities used at the mobility boundary.

use uom::si::f64::{
    Acceleration as UomAcceleration, Force as UomForce, Length as UomLength, Mass as UomMass,
    Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Metric tonnes.
#[inline]
pub fn tonnes(v: f64) -> Mass {
    use uom::si::mass::ton;
    Mass::new::<ton>(v)
}

#[inline]
pub fn kn(v: f64) -> Force {
    use uom::si::force::kilonewton;
    Force::new::<kilonewton>(v)
}

#[inline]
pub fn kph(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn in_kph(v: Velocity) -> f64 {
    use uom::si::velocity::kilometer_per_hour;
    v.get::<kilometer_per_hour>()
}

#[inline]
pub fn in_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thrust_over_mass_is_acceleration() {
        use uom::si::acceleration::meter_per_second_squared;
        let a: Accel = kn(500.0) / tonnes(50.0);
        assert!((a.get::<meter_per_second_squared>() - 10.0).abs() < 1e-9);
        assert!(constants::g0() < a);
    }

    #[test]
    fn kph_round_trip() {
        let v = kph(97.2);
        assert!((in_kph(v) - 97.2).abs() < 1e-9);
        assert!((in_m(m(3.5)) - 3.5).abs() < 1e-12);
    }
}
