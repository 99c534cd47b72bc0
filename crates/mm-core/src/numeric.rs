//! Float helpers for metric arithmetic.

pub type Real = f64;

/// Absolute and relative tolerance for comparing computed metrics.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// `a` and `b` agree within either tolerance. Equal infinities agree.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Divide with the "0/0 per unit is 0" convention.
///
/// A zero numerator over a zero denominator yields `0.0` instead of NaN.
/// Any other zero denominator follows IEEE semantics (signed infinity).
pub fn ratio_or_zero(numerator: Real, denominator: Real) -> Real {
    if numerator == 0.0 && denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Binomial coefficient `n choose k` as a float.
pub fn binomial(n: u32, k: u32) -> Real {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * Real::from(n - i) / Real::from(i + 1);
    }
    acc
}
