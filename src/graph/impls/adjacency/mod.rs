//! Graphs declared through an explicit list of weighted paths.


use crate::error::BuildError;
use crate::graph::{Builder, Graph, Layout};

use codec::{Edge, Entry, Node, Payload, PointId};
use pathway_geo::Metric;

use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyConfig {
    /// Mirror every declared path so that it may be travelled both ways.
    pub undirected: bool,
    /// The metric used to snap points onto the graph and report path lengths.
    pub metric: Metric,
}

impl AdjacencyConfig {
    pub fn undirected() -> Self {
        Self {
            undirected: true,
            ..Self::default()
        }
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        Self { metric, ..self }
    }
}

/// Builds a [`Graph`] whose arcs are exactly the declared paths.
///
/// ```rust
/// use pathway::graph::{AdjacencyBuilder, AdjacencyConfig, Graph};
/// use pathway::{Edge, Node, Point, PointId};
///
/// let nodes = vec![
///     Node::new(Point::new(0.0, 0.0), PointId(1)),
///     Node::new(Point::new(1.0, 0.0), PointId(2)),
/// ];
/// let edges = vec![Edge::new(PointId(1), PointId(2), 4.0)];
///
/// let graph = Graph::build(AdjacencyBuilder::new(nodes, edges, AdjacencyConfig::undirected())).unwrap();
/// assert_eq!(graph.weight(PointId(2), PointId(1)), Some(4.0));
/// ```
pub struct AdjacencyBuilder<E: Entry = PointId> {
    nodes: Vec<Node<E>>,
    edges: Vec<Edge<E>>,
    config: AdjacencyConfig,
}

impl<E> AdjacencyBuilder<E>
where
    E: Entry,
{
    pub fn new(nodes: Vec<Node<E>>, edges: Vec<Edge<E>>, config: AdjacencyConfig) -> Self {
        Self {
            nodes,
            edges,
            config,
        }
    }
}

impl AdjacencyBuilder<PointId> {
    /// Takes both the nodes and the paths of a [`Payload`].
    pub fn from_payload(payload: &Payload, config: AdjacencyConfig) -> Self {
        Self::new(payload.points(), payload.edges().collect(), config)
    }
}

impl<E> Builder for AdjacencyBuilder<E>
where
    E: Entry,
{
    type Entry = E;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = tracing::Level::INFO))]
    fn build(self) -> Result<Graph<E>, BuildError> {
        let start_time = Instant::now();
        let AdjacencyBuilder {
            nodes,
            edges,
            config,
        } = self;

        for node in &nodes {
            pathway_geo::validate(node.position)?;
        }

        let distinct = nodes
            .iter()
            .map(|node| node.id)
            .collect::<FxHashSet<_>>()
            .len();

        if distinct < 2 {
            return Err(BuildError::TooFewPoints(distinct));
        }

        let declared = edges.len();
        let edges = edges
            .into_iter()
            .flat_map(|edge| {
                let reverse = config.undirected.then(|| edge.reversed());
                std::iter::once(edge).chain(reverse)
            })
            .collect::<Vec<_>>();

        debug!(
            "Expanded {declared} declared paths into {} arcs",
            edges.len()
        );

        let graph = Graph::assemble(nodes, edges, Layout::Scattered, config.metric)?;

        info!(
            "Finished. Built adjacency graph of {} nodes and {} arcs in {}ms",
            graph.size(),
            graph.edge_count(),
            start_time.elapsed().as_millis()
        );

        Ok(graph)
    }
}
