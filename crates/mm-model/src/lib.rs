//! mm-model: read-only loadout and catalog model for mechmetrics.
//!
//! Provides:
//! - Item definitions (weapons, engines, heat sinks, jump jets, ammunition)
//! - An explicit [`Catalog`] addressed by [`mm_core::ItemId`] handles
//! - [`Loadout`]s built incrementally with [`LoadoutBuilder`]
//! - The weapon stat mini-language ([`WeaponStat`])
//!
//! # Example
//!
//! ```
//! use mm_model::{sample, Location, LoadoutBuilder, WeaponStat};
//!
//! let catalog = sample::catalog().unwrap();
//! let mut builder = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
//! builder.equip_named(Location::RightArm, "Medium Laser").unwrap();
//! let loadout = builder.build();
//!
//! let dps = WeaponStat::parse("d/s").unwrap();
//! let total: f64 = loadout
//!     .weapons()
//!     .map(|w| w.weapon.stat(&dps, loadout.modifiers()))
//!     .sum();
//! assert_eq!(total, 1.25);
//! ```

pub mod catalog;
pub mod chassis;
pub mod error;
pub mod item;
pub mod loadout;
pub mod modifiers;
pub mod range;
pub mod sample;
pub mod stat;
pub mod weapon;

// Re-exports for ergonomics
pub use catalog::{Catalog, CatalogBuilder};
pub use chassis::{Chassis, ComponentDef, Location};
pub use error::{ModelError, ModelResult};
pub use item::{
    Ammunition, Engine, EngineKind, GenericItem, HeatSink, HeatSinkKind, Item, JumpJet,
};
pub use loadout::{ComponentLoadout, EquippedItem, EquippedWeapon, Loadout, LoadoutBuilder};
pub use modifiers::{Modifiers, Upgrades};
pub use range::RangeProfile;
pub use stat::{StatComponent, WeaponStat};
pub use weapon::{GhostHeatRule, JamProfile, Weapon, WeaponClass};
