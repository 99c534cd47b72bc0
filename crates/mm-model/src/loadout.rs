//! Loadouts: a chassis with equipment, upgrades and modifiers.
//!
//! A [`Loadout`] borrows the [`Catalog`] it was built from. Each equipped
//! occurrence gets its own [`EquippedId`], so two copies of one weapon in
//! different mounts stay distinct.

use mm_core::{EquippedId, ItemId};

use crate::catalog::Catalog;
use crate::chassis::{Chassis, Location};
use crate::error::{ModelError, ModelResult};
use crate::item::{Engine, HeatSinkKind, Item, JumpJet};
use crate::modifiers::{Modifiers, Upgrades};
use crate::weapon::Weapon;

/// One equipped occurrence of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquippedItem {
    pub id: EquippedId,
    pub item: ItemId,
    pub location: Location,
}

/// An equipped weapon together with its definition.
#[derive(Debug, Clone, Copy)]
pub struct EquippedWeapon<'c> {
    pub equipped: EquippedId,
    pub item: ItemId,
    pub location: Location,
    pub weapon: &'c Weapon,
}

/// Equipment state of one location.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLoadout {
    pub location: Location,
    pub internal_hp: f64,
    pub armor: f64,
    pub slots: u32,
    items: Vec<EquippedId>,
    used_slots: u32,
}

impl ComponentLoadout {
    /// Equipped items in slot order.
    pub fn items(&self) -> &[EquippedId] {
        &self.items
    }

    pub fn free_slots(&self) -> u32 {
        self.slots - self.used_slots
    }
}

#[derive(Debug, Clone)]
pub struct Loadout<'c> {
    catalog: &'c Catalog,
    chassis: Chassis,
    upgrades: Upgrades,
    modifiers: Modifiers,
    equipped: Vec<EquippedItem>,
    components: Vec<ComponentLoadout>,
}

impl<'c> Loadout<'c> {
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    pub fn upgrades(&self) -> &Upgrades {
        &self.upgrades
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn equipped(&self) -> &[EquippedItem] {
        &self.equipped
    }

    pub fn equipped_item(&self, id: EquippedId) -> Option<&EquippedItem> {
        self.equipped.get(id.index() as usize)
    }

    /// Definition of an equipped item.
    pub fn item(&self, id: EquippedId) -> Option<&'c Item> {
        let equipped = self.equipped_item(id)?;
        self.catalog.item(equipped.item)
    }

    /// All equipped items with their definitions, in equip order.
    pub fn items(&self) -> impl Iterator<Item = (EquippedItem, &'c Item)> + '_ {
        let catalog = self.catalog;
        self.equipped
            .iter()
            .filter_map(move |e| catalog.item(e.item).map(|item| (*e, item)))
    }

    pub fn components(&self) -> &[ComponentLoadout] {
        &self.components
    }

    pub fn component(&self, location: Location) -> Option<&ComponentLoadout> {
        self.components.iter().find(|c| c.location == location)
    }

    /// Items of one location in slot order.
    pub fn component_items(
        &self,
        location: Location,
    ) -> impl Iterator<Item = (EquippedId, &'c Item)> + '_ {
        let catalog = self.catalog;
        self.component(location)
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&id| {
                let equipped = self.equipped.get(id.index() as usize)?;
                catalog.item(equipped.item).map(|item| (id, item))
            })
    }

    pub fn weapons(&self) -> impl Iterator<Item = EquippedWeapon<'c>> + '_ {
        self.items().filter_map(|(e, item)| {
            item.as_weapon().map(|weapon| EquippedWeapon {
                equipped: e.id,
                item: e.item,
                location: e.location,
                weapon,
            })
        })
    }

    pub fn engine(&self) -> Option<&'c Engine> {
        self.items().find_map(|(_, item)| item.as_engine())
    }

    /// Heat sinks equipped outside the engine.
    pub fn heat_sink_count(&self) -> u32 {
        self.items()
            .filter(|(_, item)| item.as_heat_sink().is_some())
            .count() as u32
    }

    /// Heat sinks built into the engine, zero without an engine.
    pub fn engine_heat_sinks(&self) -> u32 {
        self.engine().map_or(0, |e| e.internal_heat_sinks)
    }

    pub fn total_heat_sinks(&self) -> u32 {
        self.heat_sink_count() + self.engine_heat_sinks()
    }

    /// Jump-jet type and how many of them are equipped.
    pub fn jump_jets(&self) -> Option<(&'c JumpJet, u32)> {
        let mut found: Option<(&'c JumpJet, u32)> = None;
        for (_, item) in self.items() {
            if let Some(jj) = item.as_jump_jet() {
                found = Some(match found {
                    Some((first, count)) => (first, count + 1),
                    None => (jj, 1),
                });
            }
        }
        found
    }

    /// Rounds of ammunition carried for an ammo type.
    pub fn ammo_rounds(&self, ammo_type: &str) -> u32 {
        self.items()
            .filter_map(|(_, item)| item.as_ammunition())
            .filter(|a| a.ammo_type == ammo_type)
            .map(|a| a.rounds)
            .sum()
    }

    pub fn armor_total(&self) -> f64 {
        self.components.iter().map(|c| c.armor).sum()
    }

    pub fn structure_mass(&self) -> f64 {
        self.chassis.max_tons * self.upgrades.structure_mass_fraction()
    }

    pub fn armor_mass(&self) -> f64 {
        self.armor_total() / self.upgrades.armor_points_per_ton()
    }

    pub fn item_mass(&self) -> f64 {
        self.items().map(|(_, item)| item.tons()).sum()
    }

    pub fn mass(&self) -> f64 {
        self.structure_mass() + self.armor_mass() + self.item_mass()
    }
}

/// Incremental loadout builder with slot and compatibility checks.
#[derive(Debug)]
pub struct LoadoutBuilder<'c> {
    catalog: &'c Catalog,
    chassis: Chassis,
    upgrades: Upgrades,
    modifiers: Modifiers,
    equipped: Vec<EquippedItem>,
    components: Vec<ComponentLoadout>,
}

impl<'c> LoadoutBuilder<'c> {
    pub fn new(catalog: &'c Catalog, chassis: Chassis) -> ModelResult<Self> {
        chassis.validate()?;
        let components = chassis
            .components
            .iter()
            .map(|def| ComponentLoadout {
                location: def.location,
                internal_hp: def.internal_hp,
                armor: 0.0,
                slots: def.slots,
                items: Vec::new(),
                used_slots: 0,
            })
            .collect();
        Ok(Self {
            catalog,
            chassis,
            upgrades: Upgrades::default(),
            modifiers: Modifiers::default(),
            equipped: Vec::new(),
            components,
        })
    }

    pub fn with_upgrades(mut self, upgrades: Upgrades) -> Self {
        self.upgrades = upgrades;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn set_armor(&mut self, location: Location, armor: f64) -> ModelResult<()> {
        if !(armor.is_finite() && armor >= 0.0) {
            return Err(ModelError::InvalidArg {
                what: "armor must be finite and non-negative",
            });
        }
        self.component_mut(location)?.armor = armor;
        Ok(())
    }

    /// Equip a catalog item at `location`, returning its equipped handle.
    pub fn equip(&mut self, location: Location, item_id: ItemId) -> ModelResult<EquippedId> {
        let catalog = self.catalog;
        let item = catalog
            .item(item_id)
            .ok_or(ModelError::UnknownItem { id: item_id })?;

        match item {
            Item::Engine(_) => {
                if location != Location::CenterTorso {
                    return Err(ModelError::Incompatible {
                        id: item_id,
                        what: "engines mount in the center torso",
                    });
                }
                if self.has_engine() {
                    return Err(ModelError::Incompatible {
                        id: item_id,
                        what: "loadout already has an engine",
                    });
                }
            }
            Item::HeatSink(hs) => {
                let wanted = if self.upgrades.double_heat_sinks {
                    HeatSinkKind::Double
                } else {
                    HeatSinkKind::Single
                };
                if hs.kind != wanted {
                    return Err(ModelError::Incompatible {
                        id: item_id,
                        what: "heat sink type does not match upgrades",
                    });
                }
            }
            Item::JumpJet(jj) => {
                let tons = self.chassis.max_tons;
                if tons < jj.min_tons || tons > jj.max_tons {
                    return Err(ModelError::Incompatible {
                        id: item_id,
                        what: "jump jet does not fit chassis mass",
                    });
                }
                if let Some(other) = self.first_jump_jet() {
                    if other != item_id {
                        return Err(ModelError::Incompatible {
                            id: item_id,
                            what: "jump jets must all be of one type",
                        });
                    }
                }
            }
            _ => {}
        }

        let needed = item.slots();
        let id = EquippedId::from_index(self.equipped.len() as u32);
        let component = self.component_mut(location)?;
        let free = component.free_slots();
        if needed > free {
            return Err(ModelError::SlotsExceeded {
                location,
                needed,
                free,
            });
        }
        component.used_slots += needed;
        component.items.push(id);

        self.equipped.push(EquippedItem {
            id,
            item: item_id,
            location,
        });
        Ok(id)
    }

    pub fn equip_named(&mut self, location: Location, name: &str) -> ModelResult<EquippedId> {
        let id = self.catalog.require(name)?;
        self.equip(location, id)
    }

    pub fn build(self) -> Loadout<'c> {
        Loadout {
            catalog: self.catalog,
            chassis: self.chassis,
            upgrades: self.upgrades,
            modifiers: self.modifiers,
            equipped: self.equipped,
            components: self.components,
        }
    }

    fn component_mut(&mut self, location: Location) -> ModelResult<&mut ComponentLoadout> {
        self.components
            .iter_mut()
            .find(|c| c.location == location)
            .ok_or(ModelError::MissingLocation { location })
    }

    fn has_engine(&self) -> bool {
        self.equipped
            .iter()
            .any(|e| matches!(self.catalog.item(e.item), Some(Item::Engine(_))))
    }

    fn first_jump_jet(&self) -> Option<ItemId> {
        self.equipped
            .iter()
            .find(|e| matches!(self.catalog.item(e.item), Some(Item::JumpJet(_))))
            .map(|e| e.item)
    }
}
