//! Chassis definitions and hit locations.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Hit location (component) of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Head,
        Location::CenterTorso,
        Location::LeftTorso,
        Location::RightTorso,
        Location::LeftArm,
        Location::RightArm,
        Location::LeftLeg,
        Location::RightLeg,
    ];
}

/// Static description of one chassis location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentDef {
    pub location: Location,
    /// Internal structure hit points.
    pub internal_hp: f64,
    pub slots: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chassis {
    pub name: String,
    pub max_tons: f64,
    /// Top speed in km/h is `engine rating * speed_factor / max_tons`.
    pub speed_factor: f64,
    pub components: Vec<ComponentDef>,
}

impl Chassis {
    pub fn validate(&self) -> ModelResult<()> {
        if !(self.max_tons.is_finite() && self.max_tons > 0.0) {
            return Err(ModelError::InvalidArg {
                what: "chassis max mass must be positive",
            });
        }
        for (i, def) in self.components.iter().enumerate() {
            if !(def.internal_hp.is_finite() && def.internal_hp >= 0.0) {
                return Err(ModelError::InvalidArg {
                    what: "component hit points must be finite and non-negative",
                });
            }
            if self.components[..i]
                .iter()
                .any(|other| other.location == def.location)
            {
                return Err(ModelError::InvalidArg {
                    what: "chassis lists a location twice",
                });
            }
        }
        Ok(())
    }

    pub fn component(&self, location: Location) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.location == location)
    }
}
