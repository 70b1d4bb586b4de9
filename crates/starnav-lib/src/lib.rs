//! starnav library entry points.
//!
//! This crate models a universe of solar systems as a weighted spatial graph
//! and answers navigation queries over it: minimum-hop gate routes,
//! constrained minimum-distance jump routes, fuel cost for a jump route, and
//! the cumulative fatigue and cooldown of repeated jumps. Chat transport,
//! market lookups, and other glue belong to the hosting application; it feeds
//! this crate a dataset and identifiers and receives structured results or
//! error values back.
//!
//! All queries are synchronous and CPU-bound. A [`Starmap`] shared across
//! concurrent queries should live behind an `RwLock`: queries borrow `&self`,
//! and the only mutation, [`Starmap::add_bridge`], borrows `&mut self` for a
//! single insertion. Fatigue state is caller-owned and passed by value, so it
//! needs no synchronization.

#![deny(warnings)]

pub mod dataset;
pub mod db;
pub mod error;
pub mod routing;
pub mod ship;
pub mod spatial;
pub mod starmap;

pub use dataset::{LinkRecord, StarmapData, SystemRecord};
pub use db::load_starmap;
pub use error::{Error, Result};
pub use routing::{route_distance, route_gate, route_jump, JumpOptions, DEFAULT_SECURITY_LIMIT};
pub use ship::fatigue::{apply_jump, apply_route, HopFatigue, JumpFatigue, JumpType};
pub use ship::fuel::{jump_fuel, route_fuel};
pub use ship::ShipClass;
pub use spatial::SpatialIndex;
pub use starmap::{
    Link, LinkKind, Position, Starmap, StarmapStats, System, SystemId, KM_PER_LIGHT_YEAR,
};
