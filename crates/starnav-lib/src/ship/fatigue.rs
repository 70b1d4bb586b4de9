//! Cumulative jump fatigue and post-jump cooldown.
//!
//! Fatigue is a caller-owned, per-pilot value in minutes. Each jump multiplies
//! the pilot's existing fatigue (never less than a floor) by a gain factor
//! that grows with jump distance, so repeated jumps compound rather than add.
//! The cooldown before the next jump is a clamped fraction of the fatigue
//! that the jump just produced. Covert jumps accrue a tenth of the standard
//! distance penalty; industrial hulls carry their own reduced class modifier.
//!
//! The exact coefficients are calibration constants validated by the golden
//! vectors in the test suite; the shape (monotonic in distance, compounding
//! in prior fatigue, covert strictly cheaper) is the contract.

use serde::Serialize;

use super::ShipClass;
use crate::error::Result;
use crate::starmap::{Starmap, SystemId};

/// Minimum fatigue used as the compounding base, in minutes.
pub const FATIGUE_FLOOR_MINUTES: f64 = 10.0;

/// Hard cap on accumulated fatigue: 30 days, in minutes.
pub const FATIGUE_CAP_MINUTES: f64 = 43_200.0;

/// Cooldown bounds, in minutes.
pub const COOLDOWN_MIN_MINUTES: f64 = 1.0;
pub const COOLDOWN_MAX_MINUTES: f64 = 30.0;

/// Fatigue accrued per light-year for each jump variant.
const STANDARD_DISTANCE_FACTOR: f64 = 1.0;
const COVERT_DISTANCE_FACTOR: f64 = 0.1;

/// Fraction of post-jump fatigue imposed as cooldown before clamping.
const COOLDOWN_FRACTION: f64 = 0.1;

/// Jump variant. Covert jumps impose lighter penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpType {
    Standard,
    Covert,
}

impl JumpType {
    fn distance_factor(self) -> f64 {
        match self {
            JumpType::Standard => STANDARD_DISTANCE_FACTOR,
            JumpType::Covert => COVERT_DISTANCE_FACTOR,
        }
    }
}

/// Penalties produced by a single jump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JumpFatigue {
    /// Minutes before the next jump is permitted.
    pub cooldown_min: f64,
    /// Accumulated fatigue after the jump, in minutes.
    pub fatigue_min: f64,
}

/// Per-hop fatigue along a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HopFatigue {
    pub from: SystemId,
    pub to: SystemId,
    pub distance_ly: f64,
    pub cooldown_min: f64,
    pub fatigue_min: f64,
}

/// Apply one jump to a pilot's fatigue state.
///
/// Pure function of its inputs; both outputs are non-decreasing in
/// `distance_ly` and in `prior_fatigue_min`.
pub fn apply_jump(
    prior_fatigue_min: f64,
    distance_ly: f64,
    class: ShipClass,
    jump_type: JumpType,
) -> JumpFatigue {
    let distance = distance_ly.max(0.0);
    let gain =
        1.0 + jump_type.distance_factor() * class.capability().fatigue_modifier * distance;
    let fatigue = (prior_fatigue_min.max(FATIGUE_FLOOR_MINUTES) * gain).min(FATIGUE_CAP_MINUTES);
    let cooldown = (fatigue * COOLDOWN_FRACTION).clamp(COOLDOWN_MIN_MINUTES, COOLDOWN_MAX_MINUTES);

    JumpFatigue {
        cooldown_min: cooldown,
        fatigue_min: fatigue,
    }
}

/// Apply a whole jump route, threading fatigue from one hop into the next.
///
/// Stops at the first repeated consecutive system, mirroring the loop guard
/// in route distance accounting.
pub fn apply_route(
    starmap: &Starmap,
    route: &[SystemId],
    prior_fatigue_min: f64,
    class: ShipClass,
    jump_type: JumpType,
) -> Result<Vec<HopFatigue>> {
    let mut hops = Vec::with_capacity(route.len().saturating_sub(1));
    let mut fatigue = prior_fatigue_min;

    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from == to {
            break;
        }
        let distance = starmap.distance(from, to)?;
        let jump = apply_jump(fatigue, distance, class, jump_type);
        fatigue = jump.fatigue_min;
        hops.push(HopFatigue {
            from,
            to,
            distance_ly: distance,
            cooldown_min: jump.cooldown_min,
            fatigue_min: jump.fatigue_min,
        });
    }

    Ok(hops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_standard_jump_from_rest() {
        let jump = apply_jump(0.0, 5.0, ShipClass::Blackops, JumpType::Standard);
        assert!((jump.fatigue_min - 60.0).abs() < 1e-9);
        assert!((jump.cooldown_min - 6.0).abs() < 1e-9);
    }

    #[test]
    fn golden_covert_jump_from_rest() {
        let jump = apply_jump(0.0, 5.0, ShipClass::Blackops, JumpType::Covert);
        assert!((jump.fatigue_min - 15.0).abs() < 1e-9);
        assert!((jump.cooldown_min - 1.5).abs() < 1e-9);
    }

    #[test]
    fn industrial_classes_accrue_reduced_fatigue() {
        let freighter = apply_jump(0.0, 5.0, ShipClass::JumpFreighter, JumpType::Standard);
        let carrier = apply_jump(0.0, 5.0, ShipClass::Carrier, JumpType::Standard);
        assert!(freighter.fatigue_min < carrier.fatigue_min);
        assert!((freighter.fatigue_min - 15.0).abs() < 1e-9);
    }

    #[test]
    fn fatigue_compounds_across_jumps() {
        let first = apply_jump(0.0, 5.0, ShipClass::Carrier, JumpType::Standard);
        let second = apply_jump(first.fatigue_min, 5.0, ShipClass::Carrier, JumpType::Standard);
        // 10 * 6 = 60, then 60 * 6 = 360: far more than twice the first gain.
        assert!((second.fatigue_min - 360.0).abs() < 1e-9);
        assert!(second.fatigue_min - first.fatigue_min > first.fatigue_min);
    }

    #[test]
    fn fatigue_saturates_at_cap() {
        let jump = apply_jump(
            FATIGUE_CAP_MINUTES,
            100.0,
            ShipClass::Titan,
            JumpType::Standard,
        );
        assert_eq!(jump.fatigue_min, FATIGUE_CAP_MINUTES);
        assert_eq!(jump.cooldown_min, COOLDOWN_MAX_MINUTES);
    }

    #[test]
    fn cooldown_never_drops_below_minimum() {
        let jump = apply_jump(0.0, 0.0, ShipClass::Blackops, JumpType::Covert);
        assert_eq!(jump.cooldown_min, COOLDOWN_MIN_MINUTES);
    }
}
