//! A small built-in catalog and chassis.
//!
//! Used by the diagnostic CLI and by tests across the workspace. Values are
//! representative, not authoritative.

use crate::catalog::{Catalog, CatalogBuilder};
use crate::chassis::{Chassis, ComponentDef, Location};
use crate::error::ModelResult;
use crate::item::{
    Ammunition, Engine, EngineKind, GenericItem, HeatSink, HeatSinkKind, Item, JumpJet,
};
use crate::range::RangeProfile;
use crate::weapon::{GhostHeatRule, JamProfile, Weapon, WeaponClass};

fn ghost(group: u32, max_free_alpha: u32, multiplier: f64) -> Option<GhostHeatRule> {
    Some(GhostHeatRule {
        group,
        max_free_alpha,
        multiplier,
    })
}

#[allow(clippy::too_many_arguments)]
fn weapon(
    name: &str,
    class: WeaponClass,
    slots: u32,
    tons: f64,
    damage_per_shot: f64,
    heat: f64,
    cooldown: f64,
    duration: f64,
    range: RangeProfile,
) -> Weapon {
    Weapon {
        name: name.into(),
        class,
        slots,
        tons,
        health: 10.0,
        damage_per_shot,
        heat,
        cooldown,
        duration,
        range,
        ammo_type: None,
        ghost_heat: None,
        jam: None,
        shots_during_cooldown: 0,
    }
}

pub fn weapons() -> ModelResult<Vec<Weapon>> {
    use WeaponClass::*;

    let mut medium_laser = weapon(
        "Medium Laser",
        Energy,
        1,
        1.0,
        5.0,
        4.0,
        3.0,
        1.0,
        RangeProfile::direct(270.0, 540.0)?,
    );
    medium_laser.ghost_heat = ghost(0, 6, 1.0);

    let mut large_laser = weapon(
        "Large Laser",
        Energy,
        2,
        5.0,
        9.0,
        7.0,
        3.25,
        1.0,
        RangeProfile::direct(450.0, 900.0)?,
    );
    large_laser.ghost_heat = ghost(1, 2, 1.0);

    let mut er_large_laser = weapon(
        "ER Large Laser",
        Energy,
        2,
        5.0,
        9.0,
        8.5,
        3.25,
        1.0,
        RangeProfile::direct(675.0, 1350.0)?,
    );
    er_large_laser.ghost_heat = ghost(1, 2, 1.0);

    let mut ppc = weapon(
        "PPC",
        Energy,
        3,
        7.0,
        10.0,
        10.0,
        4.0,
        0.0,
        RangeProfile::new(0.0, 90.0, 540.0, 1080.0)?,
    );
    ppc.ghost_heat = ghost(0, 2, 1.0);

    let mut ac5 = weapon(
        "AC/5",
        Ballistic,
        4,
        8.0,
        5.0,
        1.0,
        1.66,
        0.0,
        RangeProfile::direct(620.0, 1240.0)?,
    );
    ac5.ammo_type = Some("AC/5".into());

    let mut uac5 = weapon(
        "Ultra AC/5",
        Ballistic,
        5,
        9.0,
        5.0,
        1.0,
        1.66,
        0.0,
        RangeProfile::direct(600.0, 1200.0)?,
    );
    uac5.ammo_type = Some("UAC/5".into());
    uac5.jam = Some(JamProfile {
        probability: 0.15,
        time: 5.0,
    });
    uac5.shots_during_cooldown = 1;

    let mut lrm10 = weapon(
        "LRM 10",
        Missile,
        2,
        5.0,
        10.0,
        4.0,
        3.75,
        0.0,
        RangeProfile::new(0.0, 180.0, 1000.0, 1000.0)?,
    );
    lrm10.ammo_type = Some("LRM".into());
    lrm10.ghost_heat = ghost(2, 2, 1.0);

    let mut machine_gun = weapon(
        "Machine Gun",
        Ballistic,
        1,
        0.5,
        0.1,
        0.0,
        0.1,
        0.0,
        RangeProfile::direct(90.0, 180.0)?,
    );
    machine_gun.ammo_type = Some("MG".into());

    let mut ams = weapon(
        "Anti-Missile System",
        AntiMissile,
        1,
        0.5,
        0.0,
        0.0,
        0.0,
        0.0,
        RangeProfile::direct(0.0, 0.0)?,
    );
    ams.ammo_type = Some("AMS".into());

    Ok(vec![
        medium_laser,
        large_laser,
        er_large_laser,
        ppc,
        ac5,
        uac5,
        lrm10,
        machine_gun,
        ams,
    ])
}

fn ammo(name: &str, ammo_type: &str, rounds: u32) -> Item {
    Item::Ammunition(Ammunition {
        name: name.into(),
        ammo_type: ammo_type.into(),
        rounds,
        slots: 1,
        tons: 1.0,
        health: 10.0,
    })
}

pub fn catalog() -> ModelResult<Catalog> {
    let mut b = CatalogBuilder::new();
    for w in weapons()? {
        b.add_weapon(w)?;
    }
    b.add(Item::Engine(Engine {
        name: "STD 250".into(),
        kind: EngineKind::Standard,
        rating: 250,
        tons: 12.5,
        slots: 6,
        health: 0.0,
        internal_heat_sinks: 10,
        heat_per_second: 0.2,
    }))?;
    b.add(Item::Engine(Engine {
        name: "XL 300".into(),
        kind: EngineKind::Xl,
        rating: 300,
        tons: 15.5,
        slots: 6,
        health: 0.0,
        internal_heat_sinks: 10,
        heat_per_second: 0.2,
    }))?;
    b.add(Item::HeatSink(HeatSink {
        name: "Heat Sink".into(),
        kind: HeatSinkKind::Single,
        slots: 1,
        tons: 1.0,
        health: 10.0,
    }))?;
    b.add(Item::HeatSink(HeatSink {
        name: "Double Heat Sink".into(),
        kind: HeatSinkKind::Double,
        slots: 3,
        tons: 1.0,
        health: 10.0,
    }))?;
    b.add(Item::JumpJet(JumpJet {
        name: "Jump Jet - Class IV".into(),
        min_tons: 40.0,
        max_tons: 55.0,
        thrust_kn: 200.0,
        burn_time: 1.5,
        slots: 1,
        tons: 1.0,
        health: 10.0,
    }))?;
    b.add(ammo("AC/5 Ammo", "AC/5", 30))?;
    b.add(ammo("UAC/5 Ammo", "UAC/5", 30))?;
    b.add(ammo("LRM Ammo", "LRM", 18))?;
    b.add(ammo("MG Ammo", "MG", 2000))?;
    b.add(ammo("AMS Ammo", "AMS", 1000))?;
    b.add(Item::Generic(GenericItem {
        name: "CASE".into(),
        slots: 1,
        tons: 0.5,
        health: 0.0,
    }))?;
    Ok(b.build())
}

/// A 50 tonne chassis with all eight locations.
pub fn medium_chassis() -> Chassis {
    let def = |location, internal_hp, slots| ComponentDef {
        location,
        internal_hp,
        slots,
    };
    Chassis {
        name: "Medium 50".into(),
        max_tons: 50.0,
        speed_factor: 16.2,
        components: vec![
            def(Location::Head, 18.0, 6),
            def(Location::CenterTorso, 62.0, 12),
            def(Location::LeftTorso, 42.0, 12),
            def(Location::RightTorso, 42.0, 12),
            def(Location::LeftArm, 32.0, 12),
            def(Location::RightArm, 32.0, 12),
            def(Location::LeftLeg, 42.0, 6),
            def(Location::RightLeg, 42.0, 6),
        ],
    }
}
