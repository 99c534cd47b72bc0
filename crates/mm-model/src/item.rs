//! Non-weapon equipment and the catalog item sum type.

use serde::{Deserialize, Serialize};

use crate::weapon::Weapon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    Standard,
    Xl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub name: String,
    pub kind: EngineKind,
    pub rating: u32,
    pub tons: f64,
    pub slots: u32,
    #[serde(default)]
    pub health: f64,
    /// Heat sinks built into the engine.
    pub internal_heat_sinks: u32,
    /// Heat produced per second while running.
    #[serde(default)]
    pub heat_per_second: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatSinkKind {
    Single,
    Double,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatSink {
    pub name: String,
    pub kind: HeatSinkKind,
    pub slots: u32,
    pub tons: f64,
    #[serde(default)]
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpJet {
    pub name: String,
    /// Chassis mass range this jump jet fits, in tonnes.
    pub min_tons: f64,
    pub max_tons: f64,
    /// Thrust of one jet in kilonewtons.
    pub thrust_kn: f64,
    /// Burn duration in seconds.
    pub burn_time: f64,
    pub slots: u32,
    pub tons: f64,
    #[serde(default)]
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ammunition {
    pub name: String,
    pub ammo_type: String,
    pub rounds: u32,
    pub slots: u32,
    pub tons: f64,
    #[serde(default)]
    pub health: f64,
}

/// Equipment with no behaviour beyond occupying slots and mass (CASE,
/// actuators, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericItem {
    pub name: String,
    pub slots: u32,
    pub tons: f64,
    #[serde(default)]
    pub health: f64,
}

/// Any item a catalog can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    Weapon(Weapon),
    Engine(Engine),
    HeatSink(HeatSink),
    JumpJet(JumpJet),
    Ammunition(Ammunition),
    Generic(GenericItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.name,
            Item::Engine(e) => &e.name,
            Item::HeatSink(h) => &h.name,
            Item::JumpJet(j) => &j.name,
            Item::Ammunition(a) => &a.name,
            Item::Generic(g) => &g.name,
        }
    }

    pub fn slots(&self) -> u32 {
        match self {
            Item::Weapon(w) => w.slots,
            Item::Engine(e) => e.slots,
            Item::HeatSink(h) => h.slots,
            Item::JumpJet(j) => j.slots,
            Item::Ammunition(a) => a.slots,
            Item::Generic(g) => g.slots,
        }
    }

    pub fn tons(&self) -> f64 {
        match self {
            Item::Weapon(w) => w.tons,
            Item::Engine(e) => e.tons,
            Item::HeatSink(h) => h.tons,
            Item::JumpJet(j) => j.tons,
            Item::Ammunition(a) => a.tons,
            Item::Generic(g) => g.tons,
        }
    }

    /// Critical hit points. Non-positive means the item cannot be destroyed
    /// by critical hits.
    pub fn health(&self) -> f64 {
        match self {
            Item::Weapon(w) => w.health,
            Item::Engine(e) => e.health,
            Item::HeatSink(h) => h.health,
            Item::JumpJet(j) => j.health,
            Item::Ammunition(a) => a.health,
            Item::Generic(g) => g.health,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_engine(&self) -> Option<&Engine> {
        match self {
            Item::Engine(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_heat_sink(&self) -> Option<&HeatSink> {
        match self {
            Item::HeatSink(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_jump_jet(&self) -> Option<&JumpJet> {
        match self {
            Item::JumpJet(j) => Some(j),
            _ => None,
        }
    }

    pub fn as_ammunition(&self) -> Option<&Ammunition> {
        match self {
            Item::Ammunition(a) => Some(a),
            _ => None,
        }
    }
}
