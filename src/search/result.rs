use crate::graph::Weight;

use codec::Entry;

use geo::{LineString, Point};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use wkt::ToWkt;

/// A snapshot of a single expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    /// Entries left on the frontier once this node was popped.
    pub frontier: usize,
    /// Expansions so far, including this one.
    pub expanded: usize,
}

/// How a search run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The goal was expanded, the path is optimal for admissible heuristics.
    Found,
    /// The frontier drained without reaching the goal.
    Unreachable,
    /// An interrupt was observed before the search completed.
    /// The path is empty and the trace partial.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<E>
where
    E: Entry,
{
    /// Identifiers along the path, start first. Empty unless found.
    pub nodes: Vec<E>,
    /// Positions along the path, start first. Empty unless found.
    pub path: Vec<Point>,

    /// Length of the path, re-walked under the graph's metric.
    pub distance: f64,
    /// Sum of the arc costs along the path.
    pub weight: Weight,

    pub frames: Vec<Frame<E>>,

    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Distinct nodes discovered, excluding the start.
    pub generated: usize,
    /// Entries pushed onto the frontier, including the start and
    /// rediscoveries at a cheaper cost.
    pub pushed: usize,

    pub outcome: Outcome,
}

impl<E> SearchResult<E>
where
    E: Entry,
{
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Whether the search ran to completion, found or not.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.outcome != Outcome::Cancelled
    }

    pub fn linestring(&self) -> LineString {
        self.path.iter().copied().collect()
    }

    /// The path as a WKT `LINESTRING`.
    pub fn wkt(&self) -> String {
        self.linestring().wkt_string()
    }
}
