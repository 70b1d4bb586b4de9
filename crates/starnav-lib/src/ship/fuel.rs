//! Fuel consumption for jump routes.
//!
//! Cost is linear in route distance, reduced by the general fuel conservation
//! skill and, for jump freighters only, by the class-specific freighter skill.

use super::{ShipClass, MAX_SKILL_LEVEL};
use crate::error::{Error, Result};
use crate::routing::route_distance;
use crate::starmap::{Starmap, SystemId};

/// Fractional fuel reduction granted per skill level.
pub const FUEL_REDUCTION_PER_LEVEL: f64 = 0.1;

/// Fuel units consumed jumping `distance_ly` in one or more hops.
///
/// `conservation_skill` is the general efficiency skill; `freighter_skill` is
/// required when (and only consulted when) `class` is
/// [`ShipClass::JumpFreighter`]. The result is rounded to the nearest whole
/// unit; zero or negative distances cost nothing.
pub fn jump_fuel(
    distance_ly: f64,
    class: ShipClass,
    conservation_skill: u8,
    freighter_skill: Option<u8>,
) -> Result<u64> {
    let mut cost_per_ly =
        class.capability().base_fuel_per_ly * (1.0 - skill_reduction(conservation_skill));

    if class == ShipClass::JumpFreighter {
        let level = freighter_skill.ok_or(Error::MissingSkill {
            skill: "freighter fuel conservation",
        })?;
        cost_per_ly *= 1.0 - skill_reduction(level);
    }

    if distance_ly <= 0.0 {
        return Ok(0);
    }

    Ok((cost_per_ly * distance_ly).round() as u64)
}

/// Fuel units consumed by a jump route, as produced by the jump router.
pub fn route_fuel(
    starmap: &Starmap,
    route: &[SystemId],
    class: ShipClass,
    conservation_skill: u8,
    freighter_skill: Option<u8>,
) -> Result<u64> {
    let distance = route_distance(starmap, route)?;
    jump_fuel(distance, class, conservation_skill, freighter_skill)
}

fn skill_reduction(level: u8) -> f64 {
    FUEL_REDUCTION_PER_LEVEL * level.min(MAX_SKILL_LEVEL) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cost_is_linear_in_distance() {
        let one = jump_fuel(1.0, ShipClass::Carrier, 0, None).unwrap();
        let ten = jump_fuel(10.0, ShipClass::Carrier, 0, None).unwrap();
        assert_eq!(one, 1_000);
        assert_eq!(ten, 10_000);
    }

    #[test]
    fn conservation_skill_reduces_cost() {
        let untrained = jump_fuel(10.0, ShipClass::Carrier, 0, None).unwrap();
        let trained = jump_fuel(10.0, ShipClass::Carrier, 5, None).unwrap();
        assert_eq!(trained, untrained / 2);
    }

    #[test]
    fn freighter_requires_class_skill() {
        let error = jump_fuel(10.0, ShipClass::JumpFreighter, 4, None).unwrap_err();
        assert!(matches!(error, Error::MissingSkill { .. }));

        // Both reductions apply multiplicatively: 3500 * 0.6 * 0.5 * 10.
        let cost = jump_fuel(10.0, ShipClass::JumpFreighter, 4, Some(5)).unwrap();
        assert_eq!(cost, 10_500);
    }

    #[test]
    fn zero_and_negative_distances_cost_nothing() {
        assert_eq!(jump_fuel(0.0, ShipClass::Titan, 0, None).unwrap(), 0);
        assert_eq!(jump_fuel(-4.0, ShipClass::Titan, 0, None).unwrap(), 0);
    }

    #[test]
    fn cost_rounds_to_nearest_unit() {
        // 450 * 0.0011 = 0.495 rounds to 0; 450 * 0.0012 = 0.54 rounds to 1.
        assert_eq!(jump_fuel(0.0011, ShipClass::Blackops, 0, None).unwrap(), 0);
        assert_eq!(jump_fuel(0.0012, ShipClass::Blackops, 0, None).unwrap(), 1);
    }
}
