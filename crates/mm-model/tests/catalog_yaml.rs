//! Integration tests: synthetic catalogs written in YAML.

use mm_model::{Catalog, Item, LoadoutBuilder, Location, ModelError, WeaponStat, sample};

const CATALOG: &str = r#"
- type: Weapon
  name: Small Laser
  class: Energy
  slots: 1
  tons: 0.5
  health: 10.0
  damage_per_shot: 3.0
  heat: 2.0
  cooldown: 2.0
  duration: 0.75
  range: { long: 90.0, max: 180.0 }
  ghost_heat: { max_free_alpha: 8, multiplier: 1.0 }
- type: Weapon
  name: Gauss Rifle
  class: Ballistic
  slots: 7
  tons: 15.0
  health: 10.0
  damage_per_shot: 15.0
  heat: 1.0
  cooldown: 4.0
  range: { long: 660.0, max: 1980.0 }
  ammo_type: Gauss
- type: Ammunition
  name: Gauss Ammo
  ammo_type: Gauss
  rounds: 10
  slots: 1
  tons: 1.0
  health: 10.0
"#;

fn catalog() -> Catalog {
    let items: Vec<Item> = serde_yaml::from_str(CATALOG).unwrap();
    Catalog::from_items(items).unwrap()
}

#[test]
fn yaml_catalog_loads_and_validates() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 3);

    let small = catalog.weapon(catalog.find("Small Laser").unwrap()).unwrap();
    assert_eq!(small.range.zero, 0.0);
    assert_eq!(small.ghost_heat.unwrap().group, 0);
    assert_eq!(small.raw_firing_period(&Default::default()), 2.75);
}

#[test]
fn invalid_range_in_yaml_is_rejected() {
    let yaml = r#"
- type: Weapon
  name: Broken
  class: Energy
  slots: 1
  tons: 1.0
  damage_per_shot: 1.0
  heat: 1.0
  cooldown: 1.0
  range: { long: 500.0, max: 100.0 }
"#;
    let items: Vec<Item> = serde_yaml::from_str(yaml).unwrap();
    let err = Catalog::from_items(items).unwrap_err();
    assert!(matches!(err, ModelError::InvalidArg { .. }));
}

#[test]
fn loadout_weapons_keep_distinct_mounts() {
    let catalog = catalog();
    let mut builder = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
    let left = builder.equip_named(Location::LeftArm, "Small Laser").unwrap();
    let right = builder.equip_named(Location::RightArm, "Small Laser").unwrap();
    builder.equip_named(Location::LeftTorso, "Gauss Rifle").unwrap();
    builder.equip_named(Location::LeftTorso, "Gauss Ammo").unwrap();
    let loadout = builder.build();

    let weapons: Vec<_> = loadout.weapons().collect();
    assert_eq!(weapons.len(), 3);
    assert_ne!(left, right);
    assert_eq!(weapons[0].item, weapons[1].item);
    assert_eq!(loadout.ammo_rounds("Gauss"), 10);
    assert!(loadout.engine().is_none());
    assert_eq!(loadout.engine_heat_sinks(), 0);
}

#[test]
fn stat_lookup_by_expression() {
    let catalog = catalog();
    let gauss = catalog.weapon(catalog.find("Gauss Rifle").unwrap()).unwrap();
    let stat: WeaponStat = "d/h".parse().unwrap();
    assert_eq!(gauss.stat(&stat, &Default::default()), 15.0);
    assert!("d/q".parse::<WeaponStat>().is_err());
}
