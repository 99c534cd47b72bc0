//! Weapon range profiles and damage falloff.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Piecewise-linear range profile of a weapon, in metres.
///
/// Effectiveness ramps from 0 at `zero` up to 1 at `min`, stays at 1 until
/// `long`, then falls linearly to 0 at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeProfile {
    #[serde(default)]
    pub zero: f64,
    #[serde(default)]
    pub min: f64,
    pub long: f64,
    pub max: f64,
}

impl RangeProfile {
    pub fn new(zero: f64, min: f64, long: f64, max: f64) -> ModelResult<Self> {
        let profile = Self {
            zero,
            min,
            long,
            max,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Full effectiveness from 0 to `long`, falloff to `max`.
    pub fn direct(long: f64, max: f64) -> ModelResult<Self> {
        Self::new(0.0, 0.0, long, max)
    }

    pub fn validate(&self) -> ModelResult<()> {
        let values = [self.zero, self.min, self.long, self.max];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ModelError::InvalidArg {
                what: "range breakpoints must be finite and non-negative",
            });
        }
        if !(self.zero <= self.min && self.min <= self.long && self.long <= self.max) {
            return Err(ModelError::InvalidArg {
                what: "range breakpoints must be ordered zero <= min <= long <= max",
            });
        }
        Ok(())
    }

    /// Profile with every breakpoint multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            zero: self.zero * factor,
            min: self.min * factor,
            long: self.long * factor,
            max: self.max * factor,
        }
    }

    pub fn breakpoints(&self) -> [f64; 4] {
        [self.zero, self.min, self.long, self.max]
    }

    /// Fraction of full damage delivered at `range`.
    pub fn effectiveness(&self, range: f64) -> f64 {
        if range < self.zero {
            0.0
        } else if range < self.min {
            (range - self.zero) / (self.min - self.zero)
        } else if range <= self.long {
            1.0
        } else if range < self.max {
            1.0 - (range - self.long) / (self.max - self.long)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_fire_falloff() {
        let p = RangeProfile::direct(270.0, 540.0).unwrap();
        assert_eq!(p.effectiveness(0.0), 1.0);
        assert_eq!(p.effectiveness(270.0), 1.0);
        assert!((p.effectiveness(405.0) - 0.5).abs() < 1e-12);
        assert_eq!(p.effectiveness(540.0), 0.0);
        assert_eq!(p.effectiveness(900.0), 0.0);
    }

    #[test]
    fn minimum_range_ramp() {
        let p = RangeProfile::new(0.0, 180.0, 1000.0, 1000.0).unwrap();
        assert_eq!(p.effectiveness(0.0), 0.0);
        assert!((p.effectiveness(90.0) - 0.5).abs() < 1e-12);
        assert_eq!(p.effectiveness(180.0), 1.0);
        assert_eq!(p.effectiveness(1000.0), 1.0);
        assert_eq!(p.effectiveness(1000.1), 0.0);
    }

    #[test]
    fn unordered_breakpoints_rejected() {
        assert!(RangeProfile::new(0.0, 300.0, 200.0, 400.0).is_err());
        assert!(RangeProfile::new(-1.0, 0.0, 200.0, 400.0).is_err());
    }

    #[test]
    fn scaling_moves_every_breakpoint() {
        let p = RangeProfile::new(10.0, 20.0, 30.0, 40.0).unwrap().scaled(1.5);
        assert_eq!(p.breakpoints(), [15.0, 30.0, 45.0, 60.0]);
    }

    proptest::proptest! {
        #[test]
        fn effectiveness_is_a_fraction_that_falls_past_long(
            zero in 0.0f64..200.0,
            ramp in 0.0f64..200.0,
            flat in 0.0f64..800.0,
            falloff in 0.0f64..800.0,
            a in 0.0f64..3000.0,
            b in 0.0f64..3000.0,
        ) {
            let min = zero + ramp;
            let long = min + flat;
            let p = RangeProfile::new(zero, min, long, long + falloff).unwrap();
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let e_near = p.effectiveness(near);
            let e_far = p.effectiveness(far);
            proptest::prop_assert!((0.0..=1.0).contains(&e_near));
            if near >= long {
                proptest::prop_assert!(e_far <= e_near);
            }
        }
    }
}
