//! Frontier reduction for bounded multi-source shortest paths.
//!
//! Given a set of complete sources and the current distance estimates,
//! [`find_pivots`] relaxes `k` rounds outward and selects the sources
//! which root a large enough shortest-path subtree. Only those pivots
//! need to be carried into the next recursion level.

use crate::graph::Graph;

use codec::Entry;

use log::debug;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Arcs within this distance of tight are considered tight.
const TIGHTNESS: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pivots<E>
where
    E: Entry,
{
    /// The selected sources, `P`.
    pub pivots: BTreeSet<E>,
    /// Every node reached within `k` relaxation rounds below the bound, `W`.
    pub reached: BTreeSet<E>,
}

/// Selects the pivots of `sources` below `bound`.
///
/// Nodes absent from `estimates` are taken to be infinitely far.
/// Estimates are read, never updated.
///
/// ```rust
/// use pathway::graph::{AdjacencyBuilder, AdjacencyConfig, Graph, find_pivots};
/// use pathway::{Edge, Node, Point, PointId};
/// use rustc_hash::FxHashMap;
///
/// let nodes = (0..3).map(|i| Node::new(Point::new(i as f64, 0.0), PointId(i))).collect();
/// let edges = vec![
///     Edge::new(PointId(0), PointId(1), 1.0),
///     Edge::new(PointId(1), PointId(2), 1.0),
/// ];
///
/// let graph = Graph::build(AdjacencyBuilder::new(nodes, edges, AdjacencyConfig::default())).unwrap();
/// let estimates = FxHashMap::from_iter([(PointId(0), 0.0), (PointId(1), 1.0), (PointId(2), 2.0)]);
///
/// let result = find_pivots(&graph, &estimates, [PointId(0)], 2, 10.0);
/// assert_eq!(result.pivots.into_iter().collect::<Vec<_>>(), vec![PointId(0)]);
/// assert_eq!(result.reached.len(), 3);
/// ```
pub fn find_pivots<E>(
    graph: &Graph<E>,
    estimates: &FxHashMap<E, f64>,
    sources: impl IntoIterator<Item = E>,
    k: usize,
    bound: f64,
) -> Pivots<E>
where
    E: Entry,
{
    let estimate = |node: &E| estimates.get(node).copied().unwrap_or(f64::INFINITY);
    let sources = sources.into_iter().collect::<BTreeSet<_>>();

    let mut reached = sources.clone();
    let mut layer = sources.clone();

    for round in 1..=k {
        let next = layer
            .iter()
            .filter(|node| estimate(*node).is_finite())
            .flat_map(|node| {
                let base = estimate(node);
                graph
                    .successors(*node)
                    .filter(move |(target, weight)| {
                        base + weight <= estimate(target) && base + weight < bound
                    })
                    .map(|(target, _)| target)
            })
            .collect::<BTreeSet<_>>();

        reached.extend(next.iter().copied());
        layer = next;

        if layer.is_empty() {
            debug!("Relaxation settled after {round} of {k} rounds");
            break;
        }
    }

    if reached.len() > k * sources.len().max(1) {
        debug!(
            "Reached {} nodes from {} sources, every source pivots",
            reached.len(),
            sources.len()
        );

        return Pivots {
            pivots: sources,
            reached,
        };
    }

    // The forest of tight arcs within the reached set
    let mut children: FxHashMap<E, Vec<E>> = FxHashMap::default();
    let mut rooted = BTreeSet::new();

    for node in &reached {
        let base = estimate(node);

        for (target, weight) in graph.successors(*node) {
            if reached.contains(&target) && (base + weight - estimate(&target)).abs() < TIGHTNESS {
                children.entry(*node).or_default().push(target);
                rooted.insert(target);
            }
        }
    }

    let subtree = |root: E| {
        let mut seen = BTreeSet::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if seen.insert(node) {
                stack.extend(children.get(&node).into_iter().flatten().copied());
            }
        }

        seen.len()
    };

    let pivots = sources
        .iter()
        .filter(|source| !rooted.contains(*source))
        .filter(|source| subtree(**source) >= k)
        .copied()
        .collect();

    Pivots { pivots, reached }
}
