use mm_crit::{
    ComponentDestructionSimulator, CritError, CritSettings, CritTargeting, simulate_loadout,
};
use mm_model::{LoadoutBuilder, Location, sample};

#[test]
fn parallel_loadout_matches_per_component() {
    let catalog = sample::catalog().unwrap();
    let mut builder = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
    let ml_a = builder.equip_named(Location::RightArm, "Medium Laser").unwrap();
    let ml_b = builder.equip_named(Location::RightArm, "Medium Laser").unwrap();
    let ppc = builder.equip_named(Location::LeftTorso, "PPC").unwrap();
    let ammo = builder.equip_named(Location::LeftTorso, "AC/5 Ammo").unwrap();
    builder.equip_named(Location::CenterTorso, "STD 250").unwrap();
    let loadout = builder.build();

    let all = simulate_loadout(&loadout, &CritSettings::default()).unwrap();
    assert_eq!(all.len(), loadout.equipped().len());
    for p in all.values() {
        assert!((0.0..=1.0).contains(p));
    }

    let mut arm = ComponentDestructionSimulator::from_component(&loadout, Location::RightArm).unwrap();
    arm.simulate();
    assert_eq!(arm.probability(ml_a), all.get(&ml_a).copied());
    assert_eq!(arm.probability(ml_b), all.get(&ml_b).copied());

    // Equal weapons in different slots are distinct and the front one is hit more.
    assert!(all[&ml_a] > all[&ml_b]);
    assert!(all[&ppc] > all[&ammo]);
}

#[test]
fn slot_weighted_runs_on_loadout() {
    let catalog = sample::catalog().unwrap();
    let mut builder = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
    let a = builder.equip_named(Location::LeftArm, "Large Laser").unwrap();
    let b = builder.equip_named(Location::LeftArm, "Medium Laser").unwrap();
    let loadout = builder.build();

    let settings = CritSettings {
        targeting: CritTargeting::SlotWeighted,
        ..CritSettings::default()
    };
    let all = simulate_loadout(&loadout, &settings).unwrap();
    // Two slots attract more hits than one.
    assert!(all[&a] > all[&b]);
}

#[test]
fn missing_location_is_reported() {
    let catalog = sample::catalog().unwrap();
    let mut chassis = sample::medium_chassis();
    chassis.components.retain(|c| c.location != Location::Head);
    let loadout = LoadoutBuilder::new(&catalog, chassis).unwrap().build();
    let err = ComponentDestructionSimulator::from_component(&loadout, Location::Head).unwrap_err();
    assert_eq!(
        err,
        CritError::MissingLocation {
            location: Location::Head
        }
    );
}
