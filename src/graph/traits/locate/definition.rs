use crate::error::LocateError;

use codec::{Entry, Node};
use geo::Point;

/// Snaps arbitrary coordinates onto the nodes of a graph.
pub trait Locate<E>
where
    E: Entry,
{
    /// The node nearest to `point` under the graph's metric,
    /// alongside its distance from `point`.
    ///
    /// Grid graphs return the cell enclosing the point (clamped onto
    /// the grid), scattered graphs the closest node. Returns `None`
    /// only for an empty graph.
    fn scan_node<'a>(&'a self, point: Point) -> Option<(&'a Node<E>, f64)>
    where
        E: 'a;

    /// An unsorted iterator of the nodes lying within `distance` of
    /// `point` under the graph's metric. Empty for a negative or NaN distance.
    fn scan_nodes<'a>(&'a self, point: Point, distance: f64) -> impl Iterator<Item = &'a Node<E>>
    where
        E: 'a;

    /// Resolves `point` onto the identifier of its nearest node.
    ///
    /// Scattered graphs reject a nearest node lying further than
    /// `max_distance` away with [`LocateError::NotFound`]. Every grid
    /// cell exists, so grids always resolve. A negative or NaN bound is
    /// rejected with [`LocateError::InvalidDistance`] on either layout.
    fn locate(&self, point: Point, max_distance: Option<f64>) -> Result<E, LocateError>;
}
