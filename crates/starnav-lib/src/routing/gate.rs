//! Minimum-hop routing over gate and bridge links.
//!
//! Every link carries the same unit cost, so breadth-first search is the
//! cost-consistent shortest-path algorithm here; a distance heuristic would
//! not be admissible against hop counts. Adjacency lists are stored sorted by
//! target id, which makes the expansion order, and therefore the returned
//! path, deterministic for a fixed graph and query.

use std::collections::{HashMap, VecDeque};

use super::reconstruct_path;
use crate::error::{Error, Result};
use crate::starmap::{Starmap, SystemId};

/// Find the minimum-hop route between two systems.
///
/// Returns the full id sequence including both endpoints; `start == goal`
/// yields the single-element route. Fails with [`Error::UnknownSystemId`] for
/// invalid endpoints and [`Error::NoRoute`] when the systems are disconnected.
pub fn route_gate(starmap: &Starmap, start: SystemId, goal: SystemId) -> Result<Vec<SystemId>> {
    for id in [start, goal] {
        if starmap.system(id).is_none() {
            return Err(Error::UnknownSystemId { id });
        }
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let mut parents: HashMap<SystemId, Option<SystemId>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for link in starmap.neighbors(current) {
            let next = link.target;
            if parents.contains_key(&next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Ok(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    Err(Error::NoRoute { start, goal })
}
