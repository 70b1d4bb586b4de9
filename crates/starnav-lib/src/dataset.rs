//! Serialized node-link description of the universe graph.
//!
//! The starmap is exchanged with the outside world as a flat list of system
//! records plus a flat list of undirected links, typically as JSON. Parsing
//! and transport are the hosting application's concern; this module only
//! defines the shape, the JSON helpers, and the export path that makes
//! `export -> reimport` reproduce an identical graph. Bridges added at
//! runtime are included in an export, so they survive a round trip only if
//! the caller re-exports after mutating the map.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::starmap::{LinkKind, Starmap, SystemId};

/// One system in the serialized dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub id: SystemId,
    pub name: String,
    pub region: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub security: f64,
    #[serde(default)]
    pub station: bool,
}

/// One undirected link in the serialized dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: SystemId,
    pub target: SystemId,
    #[serde(default)]
    pub kind: LinkKind,
}

/// Flat node-link encoding of a starmap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarmapData {
    pub nodes: Vec<SystemRecord>,
    pub links: Vec<LinkRecord>,
}

impl StarmapData {
    /// Decode a dataset from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the dataset as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Starmap {
    /// Export the current graph, including runtime bridges, as a dataset.
    ///
    /// Output is canonical: nodes sorted by id, each undirected link reported
    /// once with the lower id first, links sorted by (source, target, kind).
    pub fn to_dataset(&self) -> StarmapData {
        let mut nodes: Vec<SystemRecord> = self
            .systems()
            .map(|system| SystemRecord {
                id: system.id,
                name: system.name.clone(),
                region: system.region.clone(),
                x: system.position.x,
                y: system.position.y,
                z: system.position.z,
                security: system.security,
                station: system.station,
            })
            .collect();
        nodes.sort_unstable_by_key(|node| node.id);

        let mut links: Vec<LinkRecord> = nodes
            .iter()
            .flat_map(|node| {
                self.neighbors(node.id)
                    .iter()
                    .filter(|link| node.id < link.target)
                    .map(|link| LinkRecord {
                        source: node.id,
                        target: link.target,
                        kind: link.kind,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        links.sort_unstable_by_key(|link| (link.source, link.target, link.kind));

        StarmapData { nodes, links }
    }
}
