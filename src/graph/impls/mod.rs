//! Graph construction strategies.
//!
//! Every strategy implements [`Builder`] and is consumed by
//! [`Graph::build`](crate::graph::Graph::build). Construction is
//! deterministic: identical input always yields the same node order,
//! arcs and weights.
//!
//! - [`RadiusBuilder`] connects scattered points lying within a coverage radius.
//! - [`GridBuilder`] partitions a region into an 8-connected occupancy grid.
//! - [`AdjacencyBuilder`] takes an explicit list of weighted paths.

pub mod adjacency;
pub mod grid;
pub mod radius;

pub use adjacency::{AdjacencyBuilder, AdjacencyConfig};
pub use grid::{GridBuilder, GridConfig, Noise, Obstacles, Open, Proximity, Walkable};
pub use radius::{RadiusBuilder, RadiusConfig, Reach};

use crate::error::BuildError;
use crate::graph::Graph;
use codec::Entry;

pub trait Builder {
    type Entry: Entry;

    fn build(self) -> Result<Graph<Self::Entry>, BuildError>;
}

impl<E> Graph<E>
where
    E: Entry,
{
    /// Builds a graph using the supplied construction strategy.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = tracing::Level::INFO))]
    pub fn build<B>(builder: B) -> Result<Self, BuildError>
    where
        B: Builder<Entry = E>,
    {
        builder.build()
    }
}
