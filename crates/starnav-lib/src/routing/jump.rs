//! Minimum-distance jump routing with edges synthesized per expansion.
//!
//! There is no fixed jump edge set: from each frontier system, the candidate
//! next hops are every system within the effective range that passes the
//! security, avoid-list, and station filters. Edge cost is the true
//! light-year distance, and the A* heuristic is the straight-line distance to
//! the goal. Coordinates live in real 3-space, so the heuristic is admissible
//! and consistent; the first time the goal leaves the frontier its tentative
//! cost is optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use super::{reconstruct_path, JumpOptions};
use crate::error::{Error, Result};
use crate::starmap::{Starmap, System, SystemId};

/// Find the minimum-total-distance jump route between two systems.
///
/// The source is exempt from every destination filter; the goal must satisfy
/// the security and avoid filters but not the station filter (see
/// [`JumpOptions::station_only`]). An unreachable goal is reported as
/// [`Error::NoRoute`].
pub fn route_jump(
    starmap: &Starmap,
    start: SystemId,
    goal: SystemId,
    options: &JumpOptions,
) -> Result<Vec<SystemId>> {
    if starmap.system(start).is_none() {
        return Err(Error::UnknownSystemId { id: start });
    }
    let goal_system = starmap
        .system(goal)
        .ok_or(Error::UnknownSystemId { id: goal })?;
    if start == goal {
        return Ok(vec![start]);
    }

    // A goal that fails the security or avoid filters can never be entered.
    if goal_system.security >= options.security_limit || options.avoid.contains(&goal) {
        return Err(Error::NoRoute { start, goal });
    }

    let range = options.range_ly();
    debug!(start, goal, range_ly = range, "planning jump route");

    let mut g_score: HashMap<SystemId, f64> = HashMap::new();
    let mut parents: HashMap<SystemId, Option<SystemId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    let start_estimate = starmap.distance(start, goal)?;
    queue.push(JumpEntry::new(start, 0.0, start_estimate));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Ok(reconstruct_path(&parents, start, goal));
        }

        let candidates = starmap.systems_in_range(entry.node, range, |system| {
            permitted(system, goal, options)
        })?;

        for (next, hop_distance) in candidates {
            let tentative = current_score + hop_distance;
            if tentative < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, Some(entry.node));
                let heuristic = starmap.distance(next, goal)?;
                queue.push(JumpEntry::new(next, tentative, heuristic));
            }
        }
    }

    Err(Error::NoRoute { start, goal })
}

/// Destination filter applied to every synthesized edge.
fn permitted(system: &System, goal: SystemId, options: &JumpOptions) -> bool {
    if system.security >= options.security_limit {
        return false;
    }
    if options.avoid.contains(&system.id) {
        return false;
    }
    // The final destination may lack a station; intermediate hops may not.
    if options.station_only && !system.station && system.id != goal {
        return false;
    }
    true
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct JumpEntry {
    node: SystemId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl JumpEntry {
    fn new(node: SystemId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for JumpEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest estimate; ties break on
        // lowest accumulated cost, then lowest id, for reproducible routes.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for JumpEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
