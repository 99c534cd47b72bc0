//! The signal contract.

/// A quantity accumulated over simulation time.
///
/// `integrate_from_zero_to(t)` returns the amount accumulated over `[0, t]`.
/// For any physically valid signal the result is non-decreasing in `t`.
/// Times before zero are outside the contract; implementations treat them
/// as "nothing accumulated yet".
pub trait Signal: Send + Sync {
    fn integrate_from_zero_to(&self, t: f64) -> f64;
}

/// Signals derived from a stochastic process.
pub trait ProbabilityMass {
    /// Probability mass resolved when evaluating up to `t`, counting
    /// branches dropped as negligible.
    ///
    /// Equals 1.0 once every branch of the process is resolved. The deficit
    /// bounds the error of the expectation computed for the same `t`.
    fn probability_mass(&self, t: f64) -> f64;
}

impl<S: Signal + ?Sized> Signal for &S {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        (**self).integrate_from_zero_to(t)
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        (**self).integrate_from_zero_to(t)
    }
}

/// Sum of several signals.
#[derive(Default)]
pub struct SignalSum {
    parts: Vec<Box<dyn Signal>>,
}

impl SignalSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: impl Signal + 'static) {
        self.parts.push(Box::new(signal));
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Signal for SignalSum {
    fn integrate_from_zero_to(&self, t: f64) -> f64 {
        self.parts.iter().map(|s| s.integrate_from_zero_to(t)).sum()
    }
}

impl std::fmt::Debug for SignalSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalSum")
            .field("parts", &self.parts.len())
            .finish()
    }
}
