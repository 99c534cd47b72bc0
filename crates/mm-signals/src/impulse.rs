//! Periodic impulse train.

use crate::error::{SignalError, SignalResult};
use crate::signal::Signal;

/// Instantaneous jumps of `amplitude` at `t = 0` and every `period` after.
///
/// An infinite period models a single event at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseTrain {
    period: f64,
    amplitude: f64,
}

impl ImpulseTrain {
    pub fn new(period: f64, amplitude: f64) -> SignalResult<Self> {
        // NaN fails the comparison as well.
        if !(period > 0.0) {
            return Err(SignalError::InvalidArg {
                what: "impulse train period must be positive",
            });
        }
        Ok(Self { period, amplitude })
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Number of impulses in `[0, t]`.
    pub fn impulses_until(&self, t: f64) -> f64 {
        if t < 0.0 {
            0.0
        } else if self.period.is_infinite() {
            1.0
        } else {
            (t / self.period).floor() + 1.0
        }
    }
}

impl Signal for ImpulseTrain {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        self.amplitude * self.impulses_until(t)
    }
}
