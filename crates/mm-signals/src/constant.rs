//! Constant-rate signal.

use crate::signal::Signal;

/// Accumulates at a fixed rate: `rate * t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal {
    rate: f64,
}

impl ConstantSignal {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Signal for ConstantSignal {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        self.rate * t.max(0.0)
    }
}
