use geo::{Distance, Euclidean, Point};
use rstar::{AABB, Envelope};
use std::fmt::{Debug, Display, Formatter};

use crate::Entry;

/// Identifier of a point in a scattered (radius or adjacency) graph.
///
/// This is either the position of the point in the input order, or an
/// identifier supplied by the dataset it was read from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u64);

impl Entry for PointId {
    #[inline]
    fn identifier(&self) -> i64 {
        self.0 as i64
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for PointId {
    fn from(value: usize) -> Self {
        PointId(value as u64)
    }
}

/// Identifier of a cell within an occupancy grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: u32,
    pub col: u32,
}

impl CellId {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl Entry for CellId {
    #[inline]
    fn identifier(&self) -> i64 {
        ((self.row as i64) << 32) | self.col as i64
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid-specific payload attached to the nodes of an occupancy grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub walkable: bool,
}

/// The standardised node primitive containing a generic
/// identifier which must implement [Entry], and contain
/// some given [Point].
///
/// Nodes of an occupancy grid additionally carry their [Cell].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
    pub cell: Option<Cell>,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a given position and `id`.
    pub fn new(position: Point, id: E) -> Self {
        Self {
            id,
            position,
            cell: None,
        }
    }

    /// Attaches the grid payload for an occupancy cell.
    pub fn with_cell(self, cell: Cell) -> Self {
        Self {
            cell: Some(cell),
            ..self
        }
    }

    /// Nodes without a grid payload are always traversable.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.cell.is_none_or(|cell| cell.walkable)
    }
}

impl<E> rstar::PointDistance for Node<E>
where
    E: Entry,
{
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.position, *point).powi(2)
    }
}

impl<E> rstar::RTreeObject for Node<E>
where
    E: Entry,
{
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}
