//! Distribution of simultaneous critical hits per component hit.

use serde::{Deserialize, Serialize};

use crate::error::{CritError, CritResult};

/// Probabilities of `0, 1, 2, ...` simultaneous critical hits.
///
/// Index 0 is the miss chance. The entries always sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CriticalStrikeProbability {
    outcomes: Vec<f64>,
}

impl CriticalStrikeProbability {
    /// Miss, one, two and three critical hits.
    pub const STANDARD: [f64; 4] = [0.58, 0.25, 0.14, 0.03];

    const SUM_TOLERANCE: f64 = 1.0e-9;

    pub fn new(outcomes: Vec<f64>) -> CritResult<Self> {
        if outcomes.is_empty() {
            return Err(CritError::InvalidArg {
                what: "critical table must not be empty",
            });
        }
        if outcomes.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(CritError::InvalidArg {
                what: "critical probabilities must lie in [0, 1]",
            });
        }
        let sum: f64 = outcomes.iter().sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(CritError::InvalidArg {
                what: "critical probabilities must sum to 1",
            });
        }
        Ok(Self { outcomes })
    }

    pub fn miss(&self) -> f64 {
        self.outcomes[0]
    }

    /// Probability of exactly `crits` simultaneous critical hits.
    pub fn strike(&self, crits: usize) -> f64 {
        self.outcomes.get(crits).copied().unwrap_or(0.0)
    }

    pub fn max_crits(&self) -> usize {
        self.outcomes.len() - 1
    }

    /// `(crits, probability)` for every outcome with non-zero probability.
    pub fn outcomes(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.outcomes
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, p)| p > 0.0)
    }
}

impl Default for CriticalStrikeProbability {
    fn default() -> Self {
        Self {
            outcomes: Self::STANDARD.to_vec(),
        }
    }
}

impl TryFrom<Vec<f64>> for CriticalStrikeProbability {
    type Error = CritError;

    fn try_from(outcomes: Vec<f64>) -> CritResult<Self> {
        Self::new(outcomes)
    }
}

impl From<CriticalStrikeProbability> for Vec<f64> {
    fn from(table: CriticalStrikeProbability) -> Self {
        table.outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let t = CriticalStrikeProbability::default();
        assert_eq!(t.miss(), 0.58);
        assert_eq!(t.strike(2), 0.14);
        assert_eq!(t.strike(7), 0.0);
        assert_eq!(t.max_crits(), 3);
        let total: f64 = t.outcomes().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(CriticalStrikeProbability::new(vec![]).is_err());
        assert!(CriticalStrikeProbability::new(vec![0.5, 0.4]).is_err());
        assert!(CriticalStrikeProbability::new(vec![1.5, -0.5]).is_err());
        assert!(CriticalStrikeProbability::new(vec![f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn skips_impossible_outcomes() {
        let t = CriticalStrikeProbability::new(vec![0.5, 0.0, 0.5]).unwrap();
        let crits: Vec<usize> = t.outcomes().map(|(n, _)| n).collect();
        assert_eq!(crits, vec![0, 2]);
    }
}
