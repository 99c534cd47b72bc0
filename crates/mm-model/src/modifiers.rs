//! Multiplicative efficiencies from skills and quirks.

use serde::{Deserialize, Serialize};

/// Active modifiers of a loadout. Every field is a multiplier, `1.0` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub heat_capacity: f64,
    pub heat_dissipation: f64,
    pub weapon_heat: f64,
    pub weapon_cooldown: f64,
    pub weapon_range: f64,
    pub jam_chance: f64,
    pub jam_duration: f64,
    pub speed: f64,
    pub jump: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            heat_capacity: 1.0,
            heat_dissipation: 1.0,
            weapon_heat: 1.0,
            weapon_cooldown: 1.0,
            weapon_range: 1.0,
            jam_chance: 1.0,
            jam_duration: 1.0,
            speed: 1.0,
            jump: 1.0,
        }
    }
}

impl Modifiers {
    /// Neutral modifiers.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Structural and heat-sink upgrades applied to the whole loadout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    pub double_heat_sinks: bool,
    pub endo_steel: bool,
    pub ferro_fibrous: bool,
}

impl Upgrades {
    /// Fraction of chassis max mass spent on internal structure.
    pub fn structure_mass_fraction(&self) -> f64 {
        if self.endo_steel { 0.05 } else { 0.10 }
    }

    /// Armor points bought per tonne.
    pub fn armor_points_per_ton(&self) -> f64 {
        if self.ferro_fibrous { 35.84 } else { 32.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modifiers_are_neutral() {
        let m = Modifiers::none();
        assert_eq!(m.heat_capacity, 1.0);
        assert_eq!(m.weapon_range, 1.0);
        assert_eq!(m.jump, 1.0);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let m: Modifiers = serde_yaml::from_str("heat_dissipation: 1.15\n").unwrap();
        assert_eq!(m.heat_dissipation, 1.15);
        assert_eq!(m.heat_capacity, 1.0);
    }

    #[test]
    fn upgrade_structure_and_armor() {
        let std = Upgrades::default();
        let lite = Upgrades {
            endo_steel: true,
            ferro_fibrous: true,
            ..Upgrades::default()
        };
        assert_eq!(std.structure_mass_fraction(), 0.10);
        assert_eq!(lite.structure_mass_fraction(), 0.05);
        assert!(lite.armor_points_per_ton() > std.armor_points_per_ton());
    }
}
