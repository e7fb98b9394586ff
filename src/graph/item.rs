use crate::error::BuildError;

use codec::primitive::{CellId, Edge, Entry, Node};
use pathway_geo::{Metric, Region};

use geo::Point;
use log::{debug, warn};
use petgraph::prelude::DiGraphMap;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHasher};

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

pub type Weight = f64;

/// Adjacency storage. Backed by an index map, so node and edge iteration
/// follows insertion order and construction stays deterministic.
pub type GraphStructure<E> = DiGraphMap<E, Weight, BuildHasherDefault<FxHasher>>;

/// The arrangement the nodes of a graph were laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Arbitrary positions, as produced by the radius and adjacency builders.
    Scattered,
    /// A `rows x cols` partition of a region.
    Grid(GridLayout),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub region: Region,
    pub rows: u32,
    pub cols: u32,
}

impl GridLayout {
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.region.width() / self.cols as f64
    }

    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.region.height() / self.rows as f64
    }

    /// The center of a cell. Rows count down from the northern edge,
    /// columns count across from the western edge.
    pub fn center(&self, cell: CellId) -> Point {
        let (min, max) = (self.region.min(), self.region.max());

        Point::new(
            min.x() + (cell.col as f64 + 0.5) * self.cell_width(),
            max.y() - (cell.row as f64 + 0.5) * self.cell_height(),
        )
    }

    /// The cell enclosing `point`, clamped onto the grid when the
    /// point lies outside of the region.
    pub fn cell_at(&self, point: Point) -> CellId {
        let (min, max) = (self.region.min(), self.region.max());

        let col = ((point.x() - min.x()) / self.cell_width()).floor();
        let row = ((max.y() - point.y()) / self.cell_height()).floor();

        // NaN collapses onto the first cell through the saturating cast.
        let clamp = |value: f64, count: u32| value.clamp(0.0, (count - 1) as f64) as u32;
        CellId::new(clamp(row, self.rows), clamp(col, self.cols))
    }
}

/// A weighted, directed spatial graph.
///
/// Graphs are produced by a [`Builder`](crate::graph::Builder) and are
/// read-only afterwards, so any number of searches may share one.
pub struct Graph<E>
where
    E: Entry,
{
    pub(crate) graph: GraphStructure<E>,
    pub(crate) hash: FxHashMap<E, Node<E>>,

    pub(crate) index: RTree<Node<E>>,

    pub(crate) layout: Layout,
    pub(crate) metric: Metric,
}

impl<E> Debug for Graph<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Edges: {}",
            self.hash.len(),
            self.graph.edge_count()
        )
    }
}

impl<E> Graph<E>
where
    E: Entry,
{
    /// Assembles a graph from its nodes and edges.
    ///
    /// Nodes are inserted in the order given. Self-loops and edges which
    /// reference a node outside of the node set are dropped; repeated arcs
    /// keep their cheapest weight. Any negative or non-finite weight rejects
    /// the whole graph.
    pub(crate) fn assemble(
        nodes: Vec<Node<E>>,
        edges: impl IntoIterator<Item = Edge<E>>,
        layout: Layout,
        metric: Metric,
    ) -> Result<Self, BuildError> {
        let mut graph = GraphStructure::with_capacity(nodes.len(), nodes.len() * 4);
        let mut hash = FxHashMap::default();

        for node in &nodes {
            if hash.insert(node.id, *node).is_some() {
                return Err(BuildError::DuplicateId(node.id.identifier()));
            }

            graph.add_node(node.id);
        }

        let (mut dangling, mut loops) = (0usize, 0usize);
        for edge in edges {
            if !(edge.weight.is_finite() && edge.weight >= 0.0) {
                return Err(BuildError::NegativeCost {
                    from: edge.source.identifier(),
                    to: edge.target.identifier(),
                    cost: edge.weight,
                });
            }

            if !hash.contains_key(&edge.source) || !hash.contains_key(&edge.target) {
                dangling += 1;
                continue;
            }

            if edge.source == edge.target {
                loops += 1;
                continue;
            }

            let cheaper = graph
                .edge_weight(edge.source, edge.target)
                .is_none_or(|existing| edge.weight < *existing);

            if cheaper {
                graph.add_edge(edge.source, edge.target, edge.weight);
            }
        }

        if dangling > 0 {
            warn!("Dropped {dangling} edges referencing nodes outside of the graph");
        }

        if loops > 0 {
            debug!("Dropped {loops} self-loops");
        }

        let index = RTree::bulk_load(nodes);

        Ok(Graph {
            graph,
            hash,
            index,
            layout,
            metric,
        })
    }

    pub fn index(&self) -> &RTree<Node<E>> {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The metric used to snap points and report path lengths.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[inline]
    pub fn contains(&self, id: &E) -> bool {
        self.hash.contains_key(id)
    }

    #[inline]
    pub fn node(&self, id: &E) -> Option<&Node<E>> {
        self.hash.get(id)
    }

    #[inline]
    pub fn get_position(&self, node_index: &E) -> Option<Point<f64>> {
        self.hash.get(node_index).map(|point| point.position)
    }

    #[inline]
    pub fn get_line(&self, nodes: &[E]) -> Vec<Point<f64>> {
        nodes
            .iter()
            .filter_map(|node| self.get_position(node))
            .collect::<Vec<_>>()
    }

    /// Every node, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<E>> {
        self.graph.nodes().filter_map(|id| self.hash.get(&id))
    }

    /// Every directed arc, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<E>> + '_ {
        self.graph
            .all_edges()
            .map(|(source, target, weight)| Edge::new(source, target, *weight))
    }

    /// The outgoing arcs of `node` as `(neighbor, weight)` pairs.
    #[inline]
    pub fn successors(&self, node: E) -> impl Iterator<Item = (E, Weight)> + '_ {
        self.graph
            .edges(node)
            .map(|(_, target, weight)| (target, *weight))
    }

    /// The identifiers `node` has an outgoing arc to.
    pub fn neighbors(&self, node: E) -> impl Iterator<Item = E> + '_ {
        self.graph.neighbors(node)
    }

    #[inline]
    pub fn weight(&self, source: E, target: E) -> Option<Weight> {
        self.graph.edge_weight(source, target).copied()
    }
}
