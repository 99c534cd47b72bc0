//! Signal clipped at a cutoff time.

use crate::signal::Signal;

/// Freezes `inner` at `cutoff`: after the cutoff nothing more accumulates.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncatedSignal<S> {
    inner: S,
    cutoff: f64,
}

impl<S: Signal> TruncatedSignal<S> {
    pub fn new(inner: S, cutoff: f64) -> Self {
        Self { inner, cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Signal> Signal for TruncatedSignal<S> {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        self.inner.integrate_from_zero_to(t.min(self.cutoff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImpulseTrain;

    #[test]
    fn stops_after_cutoff() {
        let s = TruncatedSignal::new(ImpulseTrain::new(4.0, 5.0).unwrap(), 4.0);
        assert_eq!(s.integrate_from_zero_to(0.0), 5.0);
        assert_eq!(s.integrate_from_zero_to(3.999999999), 5.0);
        assert_eq!(s.integrate_from_zero_to(4.0), 10.0);
        assert_eq!(s.integrate_from_zero_to(400.0), 10.0);
    }

    #[test]
    fn infinite_cutoff_is_transparent() {
        let inner = ImpulseTrain::new(2.0, 1.0).unwrap();
        let s = TruncatedSignal::new(inner, f64::INFINITY);
        assert_eq!(s.integrate_from_zero_to(9.0), inner.integrate_from_zero_to(9.0));
    }
}
