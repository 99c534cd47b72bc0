//! Range breakpoints of a loadout.

use mm_model::Loadout;

/// Sorted, de-duplicated zero/min/long/max breakpoints of every offensive
/// weapon, scaled by the range modifier. Always contains `0.0`.
pub fn weapon_ranges(loadout: &Loadout<'_>) -> Vec<f64> {
    let modifiers = loadout.modifiers();
    let mut ranges = vec![0.0];
    for w in loadout.weapons().filter(|w| w.weapon.is_offensive()) {
        ranges.extend(w.weapon.range_profile(modifiers).breakpoints());
    }
    ranges.retain(|r| r.is_finite());
    ranges.sort_by(f64::total_cmp);
    ranges.dedup();
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_model::{LoadoutBuilder, Location, Modifiers, sample};

    #[test]
    fn empty_loadout_has_only_zero() {
        let catalog = sample::catalog().unwrap();
        let loadout = LoadoutBuilder::new(&catalog, sample::medium_chassis())
            .unwrap()
            .build();
        assert_eq!(weapon_ranges(&loadout), vec![0.0]);
    }

    #[test]
    fn union_is_sorted_and_unique() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis()).unwrap();
        b.equip_named(Location::RightArm, "Medium Laser").unwrap();
        b.equip_named(Location::RightArm, "Medium Laser").unwrap();
        b.equip_named(Location::LeftArm, "PPC").unwrap();
        b.equip_named(Location::LeftTorso, "Anti-Missile System").unwrap();
        let loadout = b.build();
        assert_eq!(
            weapon_ranges(&loadout),
            vec![0.0, 90.0, 270.0, 540.0, 1080.0]
        );
    }

    #[test]
    fn range_modifier_scales_breakpoints() {
        let catalog = sample::catalog().unwrap();
        let mut b = LoadoutBuilder::new(&catalog, sample::medium_chassis())
            .unwrap()
            .with_modifiers(Modifiers {
                weapon_range: 1.1,
                ..Modifiers::none()
            });
        b.equip_named(Location::RightArm, "Medium Laser").unwrap();
        let loadout = b.build();
        let ranges = weapon_ranges(&loadout);
        assert_eq!(ranges.len(), 3);
        assert!((ranges[1] - 297.0).abs() < 1e-9);
        assert!((ranges[2] - 594.0).abs() < 1e-9);
    }
}
