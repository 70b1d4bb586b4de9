//! Ship classes, jump capabilities, and the fuel and fatigue models.
//!
//! - [`ShipClass`] - closed enumeration of jump-capable hull classes with a
//!   single associated capability table
//! - [`fuel`] - resource consumption for a planned jump route
//! - [`fatigue`] - cumulative jump fatigue and post-jump cooldown

pub mod fatigue;
pub mod fuel;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Per-level jump range bonus from the drive calibration skill.
pub const RANGE_BONUS_PER_LEVEL: f64 = 0.25;

/// Highest trainable level for the skills consumed by these models.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Closed enumeration of jump-capable ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    Blackops,
    Carrier,
    Dreadnought,
    JumpFreighter,
    Rorqual,
    Supercarrier,
    Titan,
}

/// Jump capability constants for one ship class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassCapability {
    /// Unmodified jump range in light-years.
    pub base_range_ly: f64,
    /// Fuel units consumed per light-year before skill reductions.
    pub base_fuel_per_ly: f64,
    /// Scale applied to fatigue accrual; industrial classes accrue less.
    pub fatigue_modifier: f64,
}

impl ShipClass {
    /// Every class, in declaration order.
    pub const ALL: [ShipClass; 7] = [
        ShipClass::Blackops,
        ShipClass::Carrier,
        ShipClass::Dreadnought,
        ShipClass::JumpFreighter,
        ShipClass::Rorqual,
        ShipClass::Supercarrier,
        ShipClass::Titan,
    ];

    /// The capability table. One lookup per query; no string keys.
    pub const fn capability(self) -> ClassCapability {
        match self {
            ShipClass::Blackops => ClassCapability {
                base_range_ly: 3.5,
                base_fuel_per_ly: 450.0,
                fatigue_modifier: 1.0,
            },
            ShipClass::Carrier => ClassCapability {
                base_range_ly: 6.5,
                base_fuel_per_ly: 1_000.0,
                fatigue_modifier: 1.0,
            },
            ShipClass::Dreadnought => ClassCapability {
                base_range_ly: 5.0,
                base_fuel_per_ly: 1_000.0,
                fatigue_modifier: 1.0,
            },
            ShipClass::JumpFreighter => ClassCapability {
                base_range_ly: 5.0,
                base_fuel_per_ly: 3_500.0,
                fatigue_modifier: 0.1,
            },
            ShipClass::Rorqual => ClassCapability {
                base_range_ly: 5.0,
                base_fuel_per_ly: 1_600.0,
                fatigue_modifier: 0.1,
            },
            ShipClass::Supercarrier => ClassCapability {
                base_range_ly: 4.0,
                base_fuel_per_ly: 2_500.0,
                fatigue_modifier: 1.0,
            },
            ShipClass::Titan => ClassCapability {
                base_range_ly: 3.5,
                base_fuel_per_ly: 3_500.0,
                fatigue_modifier: 1.0,
            },
        }
    }

    /// Effective jump range in light-years at a drive calibration skill level.
    ///
    /// Levels above [`MAX_SKILL_LEVEL`] are clamped.
    pub fn jump_range(self, drive_skill: u8) -> f64 {
        let level = drive_skill.min(MAX_SKILL_LEVEL) as f64;
        self.capability().base_range_ly * (1.0 + RANGE_BONUS_PER_LEVEL * level)
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ShipClass::Blackops => "blackops",
            ShipClass::Carrier => "carrier",
            ShipClass::Dreadnought => "dreadnought",
            ShipClass::JumpFreighter => "jumpfreighter",
            ShipClass::Rorqual => "rorqual",
            ShipClass::Supercarrier => "supercarrier",
            ShipClass::Titan => "titan",
        };
        f.write_str(value)
    }
}

impl FromStr for ShipClass {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "blackops" | "black-ops" => Ok(ShipClass::Blackops),
            "carrier" => Ok(ShipClass::Carrier),
            "dread" | "dreadnought" => Ok(ShipClass::Dreadnought),
            "jf" | "jumpfreighter" | "jump-freighter" => Ok(ShipClass::JumpFreighter),
            "rorqual" => Ok(ShipClass::Rorqual),
            "super" | "supercarrier" => Ok(ShipClass::Supercarrier),
            "titan" => Ok(ShipClass::Titan),
            _ => Err(Error::InvalidShipClass {
                name: value.to_string(),
            }),
        }
    }
}
