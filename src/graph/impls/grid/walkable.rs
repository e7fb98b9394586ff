//! Walkability predicates for occupancy grids.
//!
//! A predicate is evaluated exactly once per cell while the grid is built.

use codec::CellId;
use pathway_geo::Metric;

use geo::Point;
use rstar::RTree;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::Hasher;

pub trait Walkable: Sync {
    fn walkable(&self, cell: CellId, center: Point) -> bool;
}

/// Every cell is walkable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Open;

impl Walkable for Open {
    #[inline]
    fn walkable(&self, _: CellId, _: Point) -> bool {
        true
    }
}

/// Synthetic obstacles seeded from the cell center.
///
/// Roughly `density` of the cells are blocked. The same seed and
/// coordinates always produce the same occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Noise {
    pub density: f64,
    #[serde(default)]
    pub seed: u64,
}

impl Noise {
    pub fn new(density: f64, seed: u64) -> Self {
        Self { density, seed }
    }

    /// A uniform sample in `[0, 1)` derived from the seed and position.
    fn sample(&self, center: Point) -> f64 {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write_u64(center.x().to_bits());
        hasher.write_u64(center.y().to_bits());

        // SplitMix64 finaliser, spreads the entropy into the high bits
        let mut z = hasher.finish().wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;

        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl Walkable for Noise {
    #[inline]
    fn walkable(&self, _: CellId, center: Point) -> bool {
        self.sample(center) >= self.density
    }
}

/// Walkable only near one of a set of reference points, such as the
/// nodes of a road network.
#[derive(Debug, Clone)]
pub struct Proximity {
    points: Vec<Point>,
    index: RTree<Point>,
    threshold: f64,
    metric: Metric,
}

impl Proximity {
    pub fn new(points: Vec<Point>, threshold: f64, metric: Metric) -> Self {
        let index = RTree::bulk_load(points.clone());

        Self {
            points,
            index,
            threshold,
            metric,
        }
    }
}

impl Walkable for Proximity {
    fn walkable(&self, _: CellId, center: Point) -> bool {
        if self.metric.is_planar() {
            return self
                .index
                .nearest_neighbor(&center)
                .is_some_and(|nearest| self.metric.distance(center, *nearest) <= self.threshold);
        }

        self.points
            .iter()
            .any(|point| self.metric.distance(center, *point) <= self.threshold)
    }
}

/// An explicit set of blocked cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Obstacles(pub BTreeSet<CellId>);

impl FromIterator<CellId> for Obstacles {
    fn from_iter<T: IntoIterator<Item = CellId>>(iter: T) -> Self {
        Obstacles(iter.into_iter().collect())
    }
}

impl Walkable for Obstacles {
    #[inline]
    fn walkable(&self, cell: CellId, _: Point) -> bool {
        !self.0.contains(&cell)
    }
}

impl<F> Walkable for F
where
    F: Fn(CellId, Point) -> bool + Sync,
{
    #[inline]
    fn walkable(&self, cell: CellId, center: Point) -> bool {
        self(cell, center)
    }
}
