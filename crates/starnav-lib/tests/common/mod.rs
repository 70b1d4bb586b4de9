// Shared fixtures for starnav-lib integration tests.
#![allow(dead_code)]

use starnav_lib::{
    LinkKind, LinkRecord, Starmap, StarmapData, SystemId, SystemRecord, KM_PER_LIGHT_YEAR,
};

pub const JITA: SystemId = 30000142;
pub const AMARR: SystemId = 30002187;
pub const HED_GP: SystemId = 30001161;
pub const GE_8JV: SystemId = 30001198;

/// Gate chain from HED-GP to GE-8JV, nine systems, eight hops.
pub const CHAIN: [(SystemId, &str); 9] = [
    (30001161, "HED-GP"),
    (30001158, "F4R2-Q"),
    (30001160, "G-7WUF"),
    (30001154, "V-3YG7"),
    (30001157, "3GXF-U"),
    (30001155, "Q-S7ZD"),
    (30001156, "YHN-3K"),
    (30001162, "E3OI-U"),
    (30001198, "GE-8JV"),
];

/// Straight-line distance from HED-GP to GE-8JV in light-years.
pub const CHAIN_SPAN_LY: f64 = 4.119;

fn record(
    id: SystemId,
    name: &str,
    region: &str,
    x_ly: f64,
    security: f64,
    station: bool,
) -> SystemRecord {
    SystemRecord {
        id,
        name: name.to_string(),
        region: region.to_string(),
        x: x_ly * KM_PER_LIGHT_YEAR,
        y: 0.0,
        z: 0.0,
        security,
        station,
    }
}

/// A null-sec gate chain plus two distant, mutually-linked trade hubs.
///
/// The chain systems sit on a line spanning [`CHAIN_SPAN_LY`] light-years, so
/// the chain endpoints double as the direct-jump scenario. Jita and Amarr are
/// high-sec, 6.0 ly apart, and disconnected from the chain by gates.
pub fn catch_cluster_data() -> StarmapData {
    let spacing = CHAIN_SPAN_LY / (CHAIN.len() - 1) as f64;

    let mut nodes: Vec<SystemRecord> = CHAIN
        .iter()
        .enumerate()
        .map(|(step, &(id, name))| {
            let station = matches!(name, "HED-GP" | "V-3YG7");
            record(id, name, "Catch", step as f64 * spacing, -0.2, station)
        })
        .collect();
    nodes.push(record(JITA, "Jita", "The Forge", 100.0, 0.946, true));
    nodes.push(record(AMARR, "Amarr", "Domain", 106.0, 1.0, true));

    let mut links: Vec<LinkRecord> = CHAIN
        .windows(2)
        .map(|pair| LinkRecord {
            source: pair[0].0,
            target: pair[1].0,
            kind: LinkKind::Gate,
        })
        .collect();
    links.push(LinkRecord {
        source: JITA,
        target: AMARR,
        kind: LinkKind::Gate,
    });

    StarmapData { nodes, links }
}

pub fn catch_cluster() -> Starmap {
    Starmap::from_dataset(&catch_cluster_data()).expect("cluster fixture is valid")
}

pub const LANE_A: SystemId = 1;
pub const LANE_B: SystemId = 2;
pub const LANE_C: SystemId = 3;
pub const LANE_D: SystemId = 4;
pub const LANE_E: SystemId = 5;
pub const LANE_F: SystemId = 6;
pub const LANE_HUB: SystemId = 7;

/// Six null-sec systems on a line two light-years apart, with a high-sec hub
/// offset above the midpoint. No gate links at all; jump routing only.
///
/// Stations: A, B, and D. The hub would shorten several constrained routes if
/// high-sec systems were ever traversable.
pub fn jump_lane() -> Starmap {
    let mut nodes = vec![
        record(LANE_A, "Lane-A", "Lane", 0.0, -0.3, true),
        record(LANE_B, "Lane-B", "Lane", 2.0, -0.3, true),
        record(LANE_C, "Lane-C", "Lane", 4.0, -0.3, false),
        record(LANE_D, "Lane-D", "Lane", 6.0, -0.3, true),
        record(LANE_E, "Lane-E", "Lane", 8.0, -0.3, false),
        record(LANE_F, "Lane-F", "Lane", 10.0, -0.3, false),
    ];
    let mut hub = record(LANE_HUB, "Lane-Hub", "Lane", 5.0, 0.8, true);
    hub.y = 1.0 * KM_PER_LIGHT_YEAR;
    nodes.push(hub);

    let data = StarmapData {
        nodes,
        links: Vec::new(),
    };
    Starmap::from_dataset(&data).expect("lane fixture is valid")
}
