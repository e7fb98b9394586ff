//! Occupancy-grid graphs over a bounding region.
//!
//! The region is split into `rows x cols` equal cells whose centers become
//! the node positions. Each walkable cell links to up to eight walkable
//! neighbours; blocked cells remain in the node set but carry no arcs.

#[cfg(test)]
mod test;
pub mod walkable;

pub use walkable::{Noise, Obstacles, Open, Proximity, Walkable};

use crate::error::BuildError;
use crate::graph::{Builder, Cost, CostFn, Graph, GridLayout, Layout};

use codec::{Cell, CellId, Edge, Node};
use pathway_geo::{Metric, Region};

use geo::Point;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Row and column offsets of the eight grid neighbours.
const NEIGHBOURHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    /// Fraction of the larger start/goal span added to every side
    /// of a region derived with [`GridBuilder::between`].
    pub padding: f64,
    pub metric: Metric,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            padding: 0.1,
            metric: Metric::default(),
        }
    }
}

impl GridConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        Self { metric, ..self }
    }
}

/// Builds an 8-connected occupancy [`Graph`] over a [`Region`].
///
/// ```rust
/// use pathway::graph::{Graph, GridBuilder, GridConfig};
/// use pathway::Point;
///
/// let (start, goal) = (Point::new(0.0, 0.0), Point::new(10.0, 10.0));
/// let builder = GridBuilder::between(start, goal, GridConfig::new(20, 20)).unwrap();
/// let graph = Graph::build(builder).unwrap();
///
/// assert_eq!(graph.size(), 400);
/// ```
pub struct GridBuilder<W = Open, C = Cost> {
    region: Region,
    config: GridConfig,
    anchors: Vec<Point>,
    walkable: W,
    cost: C,
}

impl GridBuilder {
    pub fn new(region: Region, config: GridConfig) -> Self {
        Self {
            region,
            config,
            anchors: vec![],
            walkable: Open,
            cost: Cost::default(),
        }
    }

    /// Lays the grid over the padded span of `start` and `goal`, anchoring
    /// both so that their cells are always walkable.
    pub fn between(start: Point, goal: Point, config: GridConfig) -> Result<Self, BuildError> {
        let region = Region::around(start, goal, config.padding)?;

        Ok(Self::new(region, config)
            .with_anchor(start)
            .with_anchor(goal))
    }
}

impl<W, C> GridBuilder<W, C>
where
    W: Walkable,
    C: CostFn,
{
    pub fn with_walkable<T: Walkable>(self, walkable: T) -> GridBuilder<T, C> {
        GridBuilder {
            region: self.region,
            config: self.config,
            anchors: self.anchors,
            walkable,
            cost: self.cost,
        }
    }

    pub fn with_cost<T: CostFn>(self, cost: T) -> GridBuilder<W, T> {
        GridBuilder {
            region: self.region,
            config: self.config,
            anchors: self.anchors,
            walkable: self.walkable,
            cost,
        }
    }

    /// Forces the cell enclosing `point` to be walkable, regardless of
    /// what the walkability predicate says about it.
    pub fn with_anchor(mut self, point: Point) -> Self {
        self.anchors.push(point);
        self
    }
}

impl<W, C> Builder for GridBuilder<W, C>
where
    W: Walkable,
    C: CostFn,
{
    type Entry = CellId;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = tracing::Level::INFO))]
    fn build(self) -> Result<Graph<CellId>, BuildError> {
        let start_time = Instant::now();
        let GridConfig {
            rows, cols, metric, ..
        } = self.config;

        if rows == 0 || cols == 0 {
            return Err(BuildError::InvalidDimensions { rows, cols });
        }

        let cells = rows as usize * cols as usize;
        if cells < 2 {
            return Err(BuildError::TooFewPoints(cells));
        }

        let layout = GridLayout {
            region: self.region,
            rows,
            cols,
        };

        let (walkable, cost) = (&self.walkable, &self.cost);

        // Row-major occupancy, evaluated once per cell.
        let mut open: Vec<bool> = (0..rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..cols).map(move |col| {
                    let cell = CellId::new(row, col);
                    walkable.walkable(cell, layout.center(cell))
                })
            })
            .collect();

        for anchor in &self.anchors {
            let cell = layout.cell_at(*anchor);
            if !self.region.contains(*anchor) {
                warn!("Anchor {anchor:?} lies outside of the region, clamped onto border cell {cell}");
            }

            let slot = &mut open[cell.row as usize * cols as usize + cell.col as usize];

            if !*slot {
                warn!("Anchor {anchor:?} lies in blocked cell {cell}, forcing it walkable");
                *slot = true;
            }
        }

        debug!(
            "Occupancy of {cells} cells took: {:?} ({} blocked)",
            start_time.elapsed(),
            open.iter().filter(|walkable| !**walkable).count()
        );

        let is_open = |row: i64, col: i64| {
            row >= 0
                && col >= 0
                && row < rows as i64
                && col < cols as i64
                && open[row as usize * cols as usize + col as usize]
        };

        let nodes = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| CellId::new(row, col)))
            .map(|cell| {
                let walkable = is_open(cell.row as i64, cell.col as i64);
                Node::new(layout.center(cell), cell).with_cell(Cell {
                    row: cell.row,
                    col: cell.col,
                    walkable,
                })
            })
            .collect::<Vec<_>>();

        let edges = nodes
            .iter()
            .filter(|node| node.walkable())
            .flat_map(|node| {
                let (row, col) = (node.id.row as i64, node.id.col as i64);

                NEIGHBOURHOOD
                    .iter()
                    .filter(move |(dr, dc)| is_open(row + dr, col + dc))
                    .map(move |(dr, dc)| {
                        let target = CellId::new((row + dr) as u32, (col + dc) as u32);
                        let weight = cost.cost(metric, node.position, layout.center(target));
                        Edge::new(node.id, target, weight)
                    })
            })
            .collect::<Vec<_>>();

        let graph = Graph::assemble(nodes, edges, Layout::Grid(layout), metric)?;

        info!(
            "Finished. Built {rows}x{cols} grid with {} arcs in {}ms",
            graph.edge_count(),
            start_time.elapsed().as_millis()
        );

        Ok(graph)
    }
}
