use std::fmt::Debug;
use std::hash::Hash;

pub mod edge;
pub mod node;

pub use edge::Edge;
pub use node::{Cell, CellId, Node, PointId};

/// A node identifier, unique within a single graph.
///
/// Identifiers must be cheap to copy and totally ordered so that
/// graph construction never depends on hash iteration order.
pub trait Entry:
    Default + Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync
{
    fn identifier(&self) -> i64;
}
