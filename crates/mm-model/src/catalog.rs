//! Explicit item catalog.
//!
//! A catalog is built once and borrowed by every loadout that references it.
//! Items are addressed by [`ItemId`] handles handed out in insertion order.

use std::collections::HashMap;

use mm_core::ItemId;

use crate::error::{ModelError, ModelResult};
use crate::item::{Engine, Item};
use crate::weapon::Weapon;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_name: HashMap<String, ItemId>,
}

impl Catalog {
    /// Build a catalog from a list of items, validating every weapon.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> ModelResult<Self> {
        let mut builder = CatalogBuilder::new();
        for item in items {
            builder.add(item)?;
        }
        Ok(builder.build())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index() as usize)
    }

    pub fn weapon(&self, id: ItemId) -> Option<&Weapon> {
        self.item(id).and_then(Item::as_weapon)
    }

    pub fn engine(&self, id: ItemId) -> Option<&Engine> {
        self.item(id).and_then(Item::as_engine)
    }

    /// Look up an item handle by its unique name.
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> ModelResult<ItemId> {
        self.find(name).ok_or_else(|| ModelError::UnknownName {
            name: name.to_string(),
        })
    }

    /// Iterate over `(handle, item)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ItemId::from_index(i as u32), item))
    }
}

/// Incremental catalog builder.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
    by_name: HashMap<String, ItemId>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and return its handle. Names must be unique.
    pub fn add(&mut self, item: Item) -> ModelResult<ItemId> {
        if let Item::Weapon(weapon) = &item {
            weapon.validate()?;
        }
        if self.by_name.contains_key(item.name()) {
            return Err(ModelError::InvalidArg {
                what: "duplicate item name in catalog",
            });
        }
        let id = ItemId::from_index(self.items.len() as u32);
        self.by_name.insert(item.name().to_string(), id);
        self.items.push(item);
        Ok(id)
    }

    pub fn add_weapon(&mut self, weapon: Weapon) -> ModelResult<ItemId> {
        self.add(Item::Weapon(weapon))
    }

    pub fn build(self) -> Catalog {
        Catalog {
            items: self.items,
            by_name: self.by_name,
        }
    }
}
