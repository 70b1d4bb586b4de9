//! SQLite static-data loader.
//!
//! Reads the legacy static data export layout (`mapSolarSystems` joined to
//! `mapRegions`, `mapSolarSystemJumps`, and optionally `staStations`) into a
//! [`StarmapData`] and validates it into a [`Starmap`]. Wormhole regions
//! (region id >= 11000001) are excluded, matching the dataset the routing
//! models were calibrated against.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::dataset::{LinkRecord, StarmapData, SystemRecord};
use crate::error::Result;
use crate::starmap::{LinkKind, Starmap, SystemId};

/// Region ids at or above this value belong to wormhole space.
const FIRST_WORMHOLE_REGION: i64 = 11_000_001;

/// Load a starmap from a static-data SQLite export.
pub fn load_starmap(db_path: &Path) -> Result<Starmap> {
    let connection = Connection::open(db_path)?;
    let data = read_dataset(&connection)?;
    debug!(
        path = %db_path.display(),
        systems = data.nodes.len(),
        links = data.links.len(),
        "loaded static data export"
    );
    Starmap::from_dataset(&data)
}

fn read_dataset(connection: &Connection) -> Result<StarmapData> {
    let station_systems = load_station_systems(connection)?;

    let mut stmt = connection.prepare(
        "SELECT s.solarSystemID, s.solarSystemName, r.regionName, s.x, s.y, s.z, s.security
         FROM mapSolarSystems s
         INNER JOIN mapRegions r ON s.regionID = r.regionID
         WHERE s.regionID < ?1",
    )?;
    let rows = stmt.query_map([FIRST_WORMHOLE_REGION], |row| {
        Ok(SystemRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            region: row.get(2)?,
            x: row.get(3)?,
            y: row.get(4)?,
            z: row.get(5)?,
            security: row.get(6)?,
            station: false,
        })
    })?;

    let mut nodes = Vec::new();
    let mut known: HashSet<SystemId> = HashSet::new();
    for entry in rows {
        let mut node = entry?;
        node.station = station_systems.contains(&node.id);
        known.insert(node.id);
        nodes.push(node);
    }

    let mut stmt = connection
        .prepare("SELECT fromSolarSystemID, toSolarSystemID FROM mapSolarSystemJumps")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    // The export lists each gate in both directions; normalize to one
    // undirected row per pair.
    let mut pairs: HashSet<(SystemId, SystemId)> = HashSet::new();
    let mut skipped_edges = 0usize;
    for row in rows {
        let (from, to): (SystemId, SystemId) = row?;
        // Jump rows into excluded regions are dropped rather than failing
        // dataset validation.
        if !known.contains(&from) || !known.contains(&to) {
            skipped_edges += 1;
            continue;
        }
        pairs.insert((from.min(to), from.max(to)));
    }

    let mut links: Vec<LinkRecord> = pairs
        .into_iter()
        .map(|(source, target)| LinkRecord {
            source,
            target,
            kind: LinkKind::Gate,
        })
        .collect();
    links.sort_unstable_by_key(|link| (link.source, link.target));

    if skipped_edges > 0 {
        warn!(
            skipped_edges,
            "ignored gate edges referencing excluded systems"
        );
    }

    Ok(StarmapData { nodes, links })
}

fn load_station_systems(connection: &Connection) -> Result<HashSet<SystemId>> {
    if !table_exists(connection, "staStations")? {
        warn!("staStations table missing; station-only routing will match nothing");
        return Ok(HashSet::new());
    }

    let mut stmt = connection.prepare("SELECT DISTINCT solarSystemID FROM staStations")?;
    let rows = stmt.query_map([], |row| row.get::<_, SystemId>(0))?;

    let mut systems = HashSet::new();
    for entry in rows {
        systems.insert(entry?);
    }
    Ok(systems)
}

fn table_exists(connection: &Connection, table: &str) -> Result<bool> {
    let mut stmt = connection
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}
