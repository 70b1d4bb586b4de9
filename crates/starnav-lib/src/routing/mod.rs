//! Route planning over the universe graph.
//!
//! Two planners share this module:
//!
//! - [`route_gate`] - minimum-hop search over gate and bridge links
//! - [`route_jump`] - minimum-distance search over jump edges synthesized
//!   from spatial proximity and [`JumpOptions`]
//!
//! Both return the full system-id sequence including source and destination;
//! a route to oneself is the single-element sequence. An exhausted frontier
//! is reported as [`Error::NoRoute`], an expected outcome for constrained
//! queries.

mod gate;
mod jump;

pub use gate::route_gate;
pub use jump::route_jump;

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::ship::ShipClass;
use crate::starmap::{Starmap, SystemId};

/// Systems at or above this security status cannot be jumped into.
pub const DEFAULT_SECURITY_LIMIT: f64 = 0.5;

/// Constraints and capability parameters for jump routing.
#[derive(Debug, Clone)]
pub struct JumpOptions {
    /// Hull class supplying base range and fatigue characteristics.
    pub ship_class: ShipClass,
    /// Drive calibration skill level applied to the class base range.
    pub drive_skill: u8,
    /// Explicit range in light-years, bypassing class and skill entirely.
    pub range_override: Option<f64>,
    /// Destinations with security at or above this value are not traversable.
    pub security_limit: f64,
    /// Systems that must not appear anywhere on the route.
    pub avoid: HashSet<SystemId>,
    /// Require a station at every intermediate hop. The final destination is
    /// exempt so a route can end at an unserviced system.
    pub station_only: bool,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            ship_class: ShipClass::Blackops,
            drive_skill: 5,
            range_override: None,
            security_limit: DEFAULT_SECURITY_LIMIT,
            avoid: HashSet::new(),
            station_only: false,
        }
    }
}

impl JumpOptions {
    /// Effective per-hop range in light-years.
    pub fn range_ly(&self) -> f64 {
        self.range_override
            .unwrap_or_else(|| self.ship_class.jump_range(self.drive_skill))
    }
}

/// Total distance of a route in light-years, summing consecutive hops.
///
/// A repeated consecutive system id marks the end of the usable route; the
/// partial sum up to that point is returned. This guards distance accounting
/// against malformed or looping routes.
pub fn route_distance(starmap: &Starmap, route: &[SystemId]) -> Result<f64> {
    let mut total = 0.0;
    for pair in route.windows(2) {
        if pair[0] == pair[1] {
            break;
        }
        total += starmap.distance(pair[0], pair[1])?;
    }
    Ok(total)
}

/// Walk predecessor links back from `goal` to `start`.
fn reconstruct_path(
    parents: &HashMap<SystemId, Option<SystemId>>,
    start: SystemId,
    goal: SystemId,
) -> Vec<SystemId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}
