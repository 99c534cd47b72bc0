//! Weapon stat expressions.
//!
//! A stat expression names a derived weapon statistic as a ratio of base
//! stats, e.g. `"d/s"` (damage per second) or `"d/h"` (damage per heat).
//! Numerator and denominator are products of single-letter components:
//!
//! | Letter | Component |
//! |--------|-----------|
//! | `d` | damage per shot |
//! | `h` | heat per shot |
//! | `s` | seconds per shot |
//! | `c` | critical slots |
//! | `t` | tons |
//!
//! A missing denominator means 1. `0/0` evaluates to `0`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// One base stat a weapon can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatComponent {
    Damage,
    Heat,
    Seconds,
    Slots,
    Tons,
}

impl StatComponent {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Damage),
            'h' => Some(Self::Heat),
            's' => Some(Self::Seconds),
            'c' => Some(Self::Slots),
            't' => Some(Self::Tons),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Damage => 'd',
            Self::Heat => 'h',
            Self::Seconds => 's',
            Self::Slots => 'c',
            Self::Tons => 't',
        }
    }
}

/// Parsed stat expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeaponStat {
    numerator: Vec<StatComponent>,
    denominator: Vec<StatComponent>,
}

impl WeaponStat {
    pub fn parse(expression: &str) -> ModelResult<Self> {
        let mut parts = expression.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(ModelError::InvalidArg {
                what: "stat expression may contain at most one '/'",
            });
        }
        if numerator.is_empty() {
            return Err(ModelError::InvalidArg {
                what: "stat expression needs a numerator",
            });
        }
        Ok(Self {
            numerator: parse_components(numerator, expression)?,
            denominator: parse_components(denominator, expression)?,
        })
    }

    pub fn damage_per_second() -> Self {
        Self {
            numerator: vec![StatComponent::Damage],
            denominator: vec![StatComponent::Seconds],
        }
    }

    pub fn heat_per_second() -> Self {
        Self {
            numerator: vec![StatComponent::Heat],
            denominator: vec![StatComponent::Seconds],
        }
    }

    pub fn damage_per_heat() -> Self {
        Self {
            numerator: vec![StatComponent::Damage],
            denominator: vec![StatComponent::Heat],
        }
    }

    pub fn numerator(&self) -> &[StatComponent] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[StatComponent] {
        &self.denominator
    }

    /// Evaluate the expression with a lookup for each base component.
    pub fn evaluate(&self, mut lookup: impl FnMut(StatComponent) -> f64) -> f64 {
        let num: f64 = self.numerator.iter().map(|&c| lookup(c)).product();
        let den: f64 = self.denominator.iter().map(|&c| lookup(c)).product();
        mm_core::ratio_or_zero(num, den)
    }
}

fn parse_components(part: &str, expression: &str) -> ModelResult<Vec<StatComponent>> {
    part.chars()
        .map(|c| {
            StatComponent::from_char(c).ok_or_else(|| ModelError::UnknownStat {
                component: c,
                expression: expression.to_string(),
            })
        })
        .collect()
}

impl FromStr for WeaponStat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WeaponStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.numerator {
            write!(f, "{}", c.as_char())?;
        }
        if !self.denominator.is_empty() {
            write!(f, "/")?;
            for c in &self.denominator {
                write!(f, "{}", c.as_char())?;
            }
        }
        Ok(())
    }
}
