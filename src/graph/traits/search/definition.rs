use crate::error::SearchError;
use crate::graph::Weight;
use crate::search::{Heuristic, Interrupt, SearchOptions, SearchResult};

use codec::Entry;
use geo::Point;

/// Shortest-path queries over a graph.
///
/// An unreachable goal is not an error: the result carries an empty
/// path and an [`Outcome::Unreachable`](crate::search::Outcome).
/// Errors are reserved for identifiers the graph does not contain and
/// endpoints which cannot be snapped onto it.
pub trait Search<E>
where
    E: Entry,
{
    /// Searches from `start` to `goal`, recording every expansion.
    fn search<H>(&self, start: E, goal: E, heuristic: H) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>;

    /// Searches under the given options, abandoning the run as soon
    /// as `interrupt` is raised.
    fn search_with<H, I>(
        &self,
        start: E,
        goal: E,
        heuristic: H,
        options: &SearchOptions<E>,
        interrupt: I,
    ) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>,
        I: Interrupt;

    /// Snaps both coordinates onto the graph, bounded by `max_distance`,
    /// and searches between the nodes they resolve to.
    fn search_points<H>(
        &self,
        start: Point,
        goal: Point,
        max_distance: Option<f64>,
        heuristic: H,
    ) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>;

    /// Finds an alternative route avoiding the `failed` nodes.
    fn reroute<H>(
        &self,
        start: E,
        goal: E,
        failed: impl IntoIterator<Item = E>,
        heuristic: H,
    ) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>;

    /// Whether `source` can be reached back from `target`, with the
    /// cost and identifiers of the cheapest such path. The cost is
    /// infinite when no path exists.
    fn has_reverse_path(&self, source: E, target: E) -> Result<(bool, Weight, Vec<E>), SearchError>;
}
