//! KD-tree spatial index backing ranged candidate queries.
//!
//! Jump routing evaluates "everything within range of here" once per
//! expansion step, which is the dominant cost of the planner. The index keeps
//! that query at O(log n + k) instead of a scan over every system. Positions
//! never change after load, so the tree is built once alongside the starmap.

use std::fmt;

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::debug;

use crate::starmap::{Position, SystemId, KM_PER_LIGHT_YEAR};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Spatial index over system positions, in light-year coordinates.
pub struct SpatialIndex {
    tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32>,
    ids: Vec<SystemId>,
    coords: Vec<[f64; 3]>,
}

impl SpatialIndex {
    /// Build an index from `(id, position)` pairs. Positions are in
    /// kilometres and stored internally in light-years.
    pub fn build(entries: impl Iterator<Item = (SystemId, Position)>) -> Self {
        let mut ids = Vec::new();
        let mut coords = Vec::new();

        for (id, position) in entries {
            ids.push(id);
            coords.push([
                position.x / KM_PER_LIGHT_YEAR,
                position.y / KM_PER_LIGHT_YEAR,
                position.z / KM_PER_LIGHT_YEAR,
            ]);
        }

        debug!(systems = ids.len(), "built spatial index");

        Self::from_parts(ids, coords)
    }

    fn from_parts(ids: Vec<SystemId>, coords: Vec<[f64; 3]>) -> Self {
        let mut tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32> = KdTree::new();
        for (index, point) in coords.iter().enumerate() {
            tree.add(point, index);
        }
        Self { tree, ids, coords }
    }

    /// All systems within `radius_ly` of a point (light-year coordinates).
    ///
    /// Returns `(id, distance_ly)` pairs in unspecified order; callers that
    /// need determinism sort the result themselves.
    pub fn within_radius(&self, center_ly: [f64; 3], radius_ly: f64) -> Vec<(SystemId, f64)> {
        if radius_ly <= 0.0 || self.ids.is_empty() {
            return Vec::new();
        }

        let squared_radius = radius_ly * radius_ly;
        self.tree
            .within_unsorted::<SquaredEuclidean>(&center_ly, squared_radius)
            .into_iter()
            .map(|neighbour| (self.ids[neighbour.item], neighbour.distance.sqrt()))
            .collect()
    }

    /// Number of indexed systems.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Clone for SpatialIndex {
    fn clone(&self) -> Self {
        Self::from_parts(self.ids.clone(), self.coords.clone())
    }
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("systems", &self.ids.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(x_ly: f64, y_ly: f64, z_ly: f64) -> Position {
        Position {
            x: x_ly * KM_PER_LIGHT_YEAR,
            y: y_ly * KM_PER_LIGHT_YEAR,
            z: z_ly * KM_PER_LIGHT_YEAR,
        }
    }

    #[test]
    fn radius_query_returns_only_systems_inside() {
        let entries = vec![
            (1, position(0.0, 0.0, 0.0)),
            (2, position(3.0, 0.0, 0.0)),
            (3, position(10.0, 0.0, 0.0)),
        ];
        let index = SpatialIndex::build(entries.into_iter());

        let mut hits = index.within_radius([0.0, 0.0, 0.0], 5.0);
        hits.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, 1);
        assert_eq!(hits[1].0, 2);
        assert!((hits[1].1 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_radius_returns_nothing() {
        let index = SpatialIndex::build(vec![(1, position(0.0, 0.0, 0.0))].into_iter());
        assert!(index.within_radius([0.0, 0.0, 0.0], 0.0).is_empty());
    }
}
