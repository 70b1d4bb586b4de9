//! In-memory universe graph: systems, gate links, and runtime jump bridges.
//!
//! The [`Starmap`] is exclusively owned by the hosting process. Every query
//! takes `&self`; the only mutation is [`Starmap::add_bridge`], which takes
//! `&mut self`. Callers that share a map across concurrent route queries
//! should wrap it in an `RwLock` (or clone an immutable snapshot) so readers
//! never observe a partially-updated graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::StarmapData;
use crate::error::{Error, Result};
use crate::spatial::SpatialIndex;

/// Numeric identifier for a solar system.
pub type SystemId = i64;

/// Kilometres per light-year, matching the starmap coordinate convention.
pub const KM_PER_LIGHT_YEAR: f64 = 9_460_000_000_000_000.0;

/// Cartesian coordinates for a solar system, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Euclidean distance to another position, in kilometres.
    pub fn distance_km(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Euclidean distance to another position, in light-years.
    pub fn distance_ly(&self, other: &Self) -> f64 {
        self.distance_km(other) / KM_PER_LIGHT_YEAR
    }
}

/// Classification for a link between two systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Short-range stargate connection with fixed unit cost.
    #[default]
    Gate,
    /// Operator-added long-range bridge, also fixed unit cost.
    Bridge,
}

/// Outgoing half of an undirected link stored in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub target: SystemId,
    pub kind: LinkKind,
}

/// A solar system. Coordinates and security are never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub id: SystemId,
    pub name: String,
    pub region: String,
    pub position: Position,
    /// Security status, roughly -1.0..=1.0; >= 0.5 is conventionally safe.
    pub security: f64,
    /// Whether the system hosts at least one dockable station.
    pub station: bool,
}

/// Counts describing the loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarmapStats {
    pub systems: usize,
    pub gates: usize,
    pub bridges: usize,
}

/// The universe graph: owns all systems and links.
#[derive(Debug, Clone)]
pub struct Starmap {
    systems: HashMap<SystemId, System>,
    /// Lowercased name -> id. Names are unique case-insensitively.
    name_index: HashMap<String, SystemId>,
    adjacency: HashMap<SystemId, Vec<Link>>,
    index: SpatialIndex,
}

impl Starmap {
    /// Build a starmap from an already-parsed dataset description.
    ///
    /// Fails with [`Error::Dataset`] on duplicate ids, duplicate names,
    /// dangling link endpoints, or non-finite coordinates/security.
    pub fn from_dataset(data: &StarmapData) -> Result<Self> {
        let mut systems: HashMap<SystemId, System> = HashMap::with_capacity(data.nodes.len());
        let mut name_index: HashMap<String, SystemId> = HashMap::with_capacity(data.nodes.len());

        for node in &data.nodes {
            let finite = [node.x, node.y, node.z, node.security]
                .iter()
                .all(|value| value.is_finite());
            if !finite {
                return Err(Error::Dataset {
                    message: format!("system {} has non-finite coordinates or security", node.id),
                });
            }

            let system = System {
                id: node.id,
                name: node.name.clone(),
                region: node.region.clone(),
                position: Position {
                    x: node.x,
                    y: node.y,
                    z: node.z,
                },
                security: node.security,
                station: node.station,
            };

            if systems.insert(node.id, system).is_some() {
                return Err(Error::Dataset {
                    message: format!("duplicate system id: {}", node.id),
                });
            }
            if name_index
                .insert(node.name.to_lowercase(), node.id)
                .is_some()
            {
                return Err(Error::Dataset {
                    message: format!("duplicate system name: {}", node.name),
                });
            }
        }

        let mut adjacency: HashMap<SystemId, Vec<Link>> = HashMap::with_capacity(systems.len());
        for &id in systems.keys() {
            adjacency.insert(id, Vec::new());
        }

        for link in &data.links {
            for endpoint in [link.source, link.target] {
                if !systems.contains_key(&endpoint) {
                    return Err(Error::Dataset {
                        message: format!(
                            "link {} <-> {} references unknown system {}",
                            link.source, link.target, endpoint
                        ),
                    });
                }
            }
            if link.source == link.target {
                return Err(Error::Dataset {
                    message: format!("link {} <-> {} is a self-loop", link.source, link.target),
                });
            }

            insert_link(&mut adjacency, link.source, link.target, link.kind);
            insert_link(&mut adjacency, link.target, link.source, link.kind);
        }

        for links in adjacency.values_mut() {
            links.sort_unstable_by_key(|link| (link.target, link.kind));
            links.dedup();
        }

        let index = SpatialIndex::build(
            systems
                .values()
                .map(|system| (system.id, system.position)),
        );

        debug!(
            systems = systems.len(),
            links = data.links.len(),
            "built starmap from dataset"
        );

        Ok(Self {
            systems,
            name_index,
            adjacency,
            index,
        })
    }

    /// Lookup a system by identifier.
    pub fn system(&self, id: SystemId) -> Option<&System> {
        self.systems.get(&id)
    }

    /// Lookup a system name by identifier.
    pub fn system_name(&self, id: SystemId) -> Option<&str> {
        self.systems.get(&id).map(|system| system.name.as_str())
    }

    /// Lookup a system identifier by case-insensitive exact name.
    pub fn system_id_by_name(&self, name: &str) -> Option<SystemId> {
        self.name_index.get(&name.to_lowercase()).copied()
    }

    /// Resolve a name to an identifier, attaching fuzzy suggestions on failure.
    pub fn resolve_system(&self, name: &str) -> Result<SystemId> {
        self.system_id_by_name(name)
            .ok_or_else(|| Error::UnknownSystem {
                name: name.to_string(),
                suggestions: self.fuzzy_system_matches(name, 3),
            })
    }

    /// All system ids whose name contains `fragment`, case-insensitively.
    ///
    /// The empty fragment matches nothing; callers validate their own input.
    /// The full matching set is returned, sorted by id. Truncation for display
    /// is a caller concern.
    pub fn search_systems(&self, fragment: &str) -> Vec<SystemId> {
        if fragment.is_empty() {
            return Vec::new();
        }
        let needle = fragment.to_lowercase();
        let mut matches: Vec<SystemId> = self
            .systems
            .values()
            .filter(|system| system.name.to_lowercase().contains(&needle))
            .map(|system| system.id)
            .collect();
        matches.sort_unstable();
        matches
    }

    /// Closest known system names to a (presumably misspelled) input.
    pub fn fuzzy_system_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .systems
            .values()
            .map(|system| {
                let score = strsim::jaro_winkler(&needle, &system.name.to_lowercase());
                (score, system.name.as_str())
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Distance between two systems in light-years. Symmetric; zero for a == b.
    pub fn distance(&self, a: SystemId, b: SystemId) -> Result<f64> {
        let from = self.systems.get(&a).ok_or(Error::UnknownSystemId { id: a })?;
        let to = self.systems.get(&b).ok_or(Error::UnknownSystemId { id: b })?;
        Ok(from.position.distance_ly(&to.position))
    }

    /// Insert (or re-assert) an undirected bridge link between two systems.
    ///
    /// Idempotent: adding the same pair twice has no additional effect. A
    /// degenerate `a == b` request is ignored. The `&mut self` receiver is the
    /// exclusive-write discipline; no query can run concurrently with it.
    pub fn add_bridge(&mut self, a: SystemId, b: SystemId) -> Result<()> {
        for id in [a, b] {
            if !self.systems.contains_key(&id) {
                return Err(Error::UnknownSystemId { id });
            }
        }
        if a == b {
            debug!(system = a, "ignoring degenerate bridge request");
            return Ok(());
        }

        insert_link(&mut self.adjacency, a, b, LinkKind::Bridge);
        insert_link(&mut self.adjacency, b, a, LinkKind::Bridge);
        for id in [a, b] {
            let links = self.adjacency.entry(id).or_default();
            links.sort_unstable_by_key(|link| (link.target, link.kind));
            links.dedup();
        }

        debug!(from = a, to = b, "added jump bridge");
        Ok(())
    }

    /// Gate and bridge links leaving `id`, sorted by target id.
    pub fn neighbors(&self, id: SystemId) -> &[Link] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All bridge pairs currently in the map, each reported once with the
    /// lower id first.
    pub fn bridges(&self) -> Vec<(SystemId, SystemId)> {
        let mut pairs: Vec<(SystemId, SystemId)> = self
            .adjacency
            .iter()
            .flat_map(|(&source, links)| {
                links
                    .iter()
                    .filter(move |link| link.kind == LinkKind::Bridge && source < link.target)
                    .map(move |link| (source, link.target))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Counts of systems, gate links, and bridges in the map.
    pub fn stats(&self) -> StarmapStats {
        let mut gates = 0usize;
        let mut bridges = 0usize;
        for links in self.adjacency.values() {
            for link in links {
                match link.kind {
                    LinkKind::Gate => gates += 1,
                    LinkKind::Bridge => bridges += 1,
                }
            }
        }
        // Undirected links are stored once per endpoint.
        StarmapStats {
            systems: self.systems.len(),
            gates: gates / 2,
            bridges: bridges / 2,
        }
    }

    /// All systems within `range_ly` of `origin` that satisfy `filter`,
    /// excluding `origin` itself, sorted by (distance, id).
    ///
    /// The KD-tree narrows the candidate set before the exact distance check,
    /// keeping the per-expansion cost of jump routing well below a full scan.
    pub fn systems_in_range<F>(
        &self,
        origin: SystemId,
        range_ly: f64,
        mut filter: F,
    ) -> Result<Vec<(SystemId, f64)>>
    where
        F: FnMut(&System) -> bool,
    {
        let source = self
            .systems
            .get(&origin)
            .ok_or(Error::UnknownSystemId { id: origin })?;
        if range_ly <= 0.0 {
            return Ok(Vec::new());
        }

        let center = [
            source.position.x / KM_PER_LIGHT_YEAR,
            source.position.y / KM_PER_LIGHT_YEAR,
            source.position.z / KM_PER_LIGHT_YEAR,
        ];
        // Slightly inflated query radius; the exact per-candidate distance
        // below is authoritative.
        let candidates = self.index.within_radius(center, range_ly * 1.000_001);

        let mut results = Vec::new();
        for (id, _) in candidates {
            if id == origin {
                continue;
            }
            let Some(system) = self.systems.get(&id) else {
                continue;
            };
            let distance = source.position.distance_ly(&system.position);
            if distance <= range_ly && filter(system) {
                results.push((id, distance));
            }
        }
        results.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(results)
    }

    /// Iterate over all systems in unspecified order.
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.values()
    }

    /// Number of systems in the map.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true when the map holds no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

fn insert_link(
    adjacency: &mut HashMap<SystemId, Vec<Link>>,
    source: SystemId,
    target: SystemId,
    kind: LinkKind,
) {
    let links = adjacency.entry(source).or_default();
    let link = Link { target, kind };
    if !links.contains(&link) {
        links.push(link);
    }
}
