//! Estimates of the remaining cost to the goal.
//!
//! The engine returns optimal paths whenever the estimate is admissible
//! (never over the true remaining cost) and consistent. With the default
//! [`Cost::Distance`](crate::graph::Cost) arcs, the graph's own [`Metric`]
//! satisfies both. Under [`Cost::Hops`](crate::graph::Cost) or a custom
//! cost, prefer [`Zero`] unless a tighter bound is known.
//!
//! ```rust
//! use pathway::search::{Heuristic, Zero};
//! use pathway::{Metric, Node, Point, PointId};
//!
//! let node = Node::new(Point::new(0.0, 0.0), PointId(0));
//! let goal = Node::new(Point::new(3.0, 4.0), PointId(1));
//!
//! assert_eq!(Heuristic::estimate(&Zero, &node, &goal), 0.0);
//! assert_eq!(Heuristic::estimate(&Metric::Euclidean, &node, &goal), 5.0);
//! ```

use codec::{Entry, Node};
use pathway_geo::Metric;

pub trait Heuristic<E>
where
    E: Entry,
{
    fn estimate(&self, node: &Node<E>, goal: &Node<E>) -> f64;
}

/// Degenerates the search into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<E> Heuristic<E> for Zero
where
    E: Entry,
{
    #[inline]
    fn estimate(&self, _: &Node<E>, _: &Node<E>) -> f64 {
        0.0
    }
}

/// The straight-line distance to the goal. [`Metric::Haversine`] yields
/// the great-circle estimate for geographic graphs.
impl<E> Heuristic<E> for Metric
where
    E: Entry,
{
    #[inline]
    fn estimate(&self, node: &Node<E>, goal: &Node<E>) -> f64 {
        self.distance(node.position, goal.position)
    }
}

/// Scales an inner estimate, such as a distance heuristic over arcs
/// which cost some multiple of their length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled<H> {
    pub inner: H,
    pub factor: f64,
}

impl<E, H> Heuristic<E> for Scaled<H>
where
    E: Entry,
    H: Heuristic<E>,
{
    #[inline]
    fn estimate(&self, node: &Node<E>, goal: &Node<E>) -> f64 {
        self.factor * self.inner.estimate(node, goal)
    }
}

impl<E, F> Heuristic<E> for F
where
    E: Entry,
    F: Fn(&Node<E>, &Node<E>) -> f64,
{
    #[inline]
    fn estimate(&self, node: &Node<E>, goal: &Node<E>) -> f64 {
        self(node, goal)
    }
}
