//! Connectivity-radius graphs over a set of scattered points.


use crate::error::BuildError;
use crate::graph::{Builder, Cost, CostFn, Graph, Layout};

use codec::{Edge, Entry, Node, PointId};
use pathway_geo::Metric;

use geo::Point;
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How far each point reaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "radius", rename_all = "snake_case")]
pub enum Reach {
    /// A radius shared by every point. Connectivity is symmetric.
    Uniform(f64),

    /// A radius per point, in input order. `a -> b` exists
    /// iff `b` lies within the radius of `a`, so reachability
    /// may be one-way.
    Directed(Vec<f64>),

    /// A radius per point, in input order. `a` and `b` are linked
    /// in both directions iff each lies within the radius of the other.
    Mutual(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusConfig {
    pub reach: Reach,
    #[serde(default)]
    pub metric: Metric,
}

impl RadiusConfig {
    pub fn uniform(radius: f64) -> Self {
        Self {
            reach: Reach::Uniform(radius),
            metric: Metric::default(),
        }
    }

    pub fn directed(radii: Vec<f64>) -> Self {
        Self {
            reach: Reach::Directed(radii),
            metric: Metric::default(),
        }
    }

    pub fn mutual(radii: Vec<f64>) -> Self {
        Self {
            reach: Reach::Mutual(radii),
            metric: Metric::default(),
        }
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        Self { metric, ..self }
    }
}

/// Builds a [`Graph`] in which every pair of points lying within reach
/// of one another is connected.
///
/// ```rust
/// use pathway::graph::{Graph, RadiusBuilder, RadiusConfig};
/// use pathway::Point;
///
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(5.0, 0.0)];
/// let graph = Graph::build(RadiusBuilder::new(points, RadiusConfig::uniform(2.0))).unwrap();
///
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct RadiusBuilder<C = Cost> {
    nodes: Vec<Node<PointId>>,
    config: RadiusConfig,
    cost: C,
}

impl RadiusBuilder {
    /// Identifies every point by its position in the input order.
    pub fn new(points: impl IntoIterator<Item = Point>, config: RadiusConfig) -> Self {
        let nodes = points
            .into_iter()
            .enumerate()
            .map(|(index, point)| Node::new(point, PointId::from(index)))
            .collect();

        Self::from_nodes(nodes, config)
    }

    /// Keeps the identifiers already carried by the nodes, such
    /// as those read from a [`Payload`](codec::Payload).
    pub fn from_nodes(nodes: Vec<Node<PointId>>, config: RadiusConfig) -> Self {
        Self {
            nodes,
            config,
            cost: Cost::default(),
        }
    }
}

impl<C> RadiusBuilder<C>
where
    C: CostFn,
{
    pub fn with_cost<T: CostFn>(self, cost: T) -> RadiusBuilder<T> {
        RadiusBuilder {
            nodes: self.nodes,
            config: self.config,
            cost,
        }
    }

    /// Validates the radii, returning the radius of each input node.
    fn radii(&self) -> Result<Vec<f64>, BuildError> {
        let radii = match &self.config.reach {
            Reach::Uniform(radius) => vec![*radius; self.nodes.len()],
            Reach::Directed(radii) | Reach::Mutual(radii) => {
                if radii.len() != self.nodes.len() {
                    return Err(BuildError::InvalidRadius(format!(
                        "{} radii given for {} points",
                        radii.len(),
                        self.nodes.len()
                    )));
                }

                radii.clone()
            }
        };

        match radii.iter().find(|radius| radius.is_nan() || **radius < 0.0) {
            Some(radius) => Err(BuildError::InvalidRadius(format!(
                "radius must be non-negative, given {radius}"
            ))),
            None => Ok(radii),
        }
    }

    /// Collapses repeated positions onto their first occurrence.
    fn distinct(
        nodes: Vec<Node<PointId>>,
        radii: Vec<f64>,
    ) -> Result<Vec<(Node<PointId>, f64)>, BuildError> {
        // Normalise -0.0 so that it keys identically to 0.0
        let key = |point: Point| ((point.x() + 0.0).to_bits(), (point.y() + 0.0).to_bits());

        let mut positions = FxHashMap::default();
        let mut ids = FxHashSet::default();
        let mut distinct = Vec::with_capacity(nodes.len());

        for (node, radius) in nodes.into_iter().zip(radii) {
            pathway_geo::validate(node.position)?;

            if !ids.insert(node.id) {
                return Err(BuildError::DuplicateId(node.id.identifier()));
            }

            match positions.get(&key(node.position)) {
                Some(first) => debug!("Point {} duplicates {first}, collapsing", node.id),
                None => {
                    positions.insert(key(node.position), node.id);
                    distinct.push((node, radius));
                }
            }
        }

        Ok(distinct)
    }
}

impl<C> Builder for RadiusBuilder<C>
where
    C: CostFn,
{
    type Entry = PointId;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = tracing::Level::INFO))]
    fn build(self) -> Result<Graph<PointId>, BuildError> {
        let start_time = Instant::now();

        let radii = self.radii()?;
        let RadiusBuilder {
            nodes,
            config,
            cost,
        } = self;

        let points = Self::distinct(nodes, radii)?;
        if points.len() < 2 {
            return Err(BuildError::TooFewPoints(points.len()));
        }

        let metric = config.metric;
        let weigh = |a: &Node<PointId>, b: &Node<PointId>| cost.cost(metric, a.position, b.position);

        // Each unordered pair is visited once, from its lower index.
        // Collecting the parallel rows preserves their order.
        let edges: Vec<Edge<PointId>> = (0..points.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let (a, ra) = &points[i];

                points[i + 1..]
                    .iter()
                    .flat_map(|(b, rb)| {
                        let forward = metric.distance(a.position, b.position);
                        let backward = metric.distance(b.position, a.position);

                        let linked = match &config.reach {
                            Reach::Uniform(radius) => forward <= *radius,
                            Reach::Mutual(_) => forward <= ra.min(*rb),
                            Reach::Directed(_) => {
                                let mut arcs = Vec::with_capacity(2);
                                if forward <= *ra {
                                    arcs.push(Edge::new(a.id, b.id, weigh(a, b)));
                                }
                                if backward <= *rb {
                                    arcs.push(Edge::new(b.id, a.id, weigh(b, a)));
                                }
                                return arcs;
                            }
                        };

                        if !linked {
                            return vec![];
                        }

                        // Symmetric links share the mean of both directions,
                        // so asymmetric cost functions still pair evenly.
                        let weight = 0.5 * (weigh(a, b) + weigh(b, a));
                        vec![Edge::new(a.id, b.id, weight), Edge::new(b.id, a.id, weight)]
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        debug!(
            "Pairwise scan of {} points took: {:?}",
            points.len(),
            start_time.elapsed()
        );

        let nodes = points.into_iter().map(|(node, _)| node).collect::<Vec<_>>();
        let graph = Graph::assemble(nodes, edges, Layout::Scattered, metric)?;

        info!(
            "Finished. Built radius graph of {} nodes and {} arcs in {}ms",
            graph.size(),
            graph.edge_count(),
            start_time.elapsed().as_millis()
        );

        Ok(graph)
    }
}
