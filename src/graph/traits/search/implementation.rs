use crate::error::SearchError;
use crate::graph::traits::search::definition::Search;
use crate::graph::{Graph, Locate, Weight};
use crate::search::{AStar, Heuristic, Interrupt, Never, SearchOptions, SearchResult, Zero};

use codec::Entry;

use geo::Point;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::Level;

impl<E> Search<E> for Graph<E>
where
    E: Entry,
{
    #[inline]
    fn search<H>(&self, start: E, goal: E, heuristic: H) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>,
    {
        self.search_with(start, goal, heuristic, &SearchOptions::default(), Never)
    }

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
        I: Interrupt,
    {
        debug!("Searching {start:?} -> {goal:?}");
        AStar::new(self, heuristic).search(start, goal, options, interrupt)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self, heuristic)))]
    fn search_points<H>(
        &self,
        start: Point,
        goal: Point,
        max_distance: Option<f64>,
        heuristic: H,
    ) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>,
    {
        let start = self.locate(start, max_distance)?;
        let goal = self.locate(goal, max_distance)?;

        self.search(start, goal, heuristic)
    }

    fn reroute<H>(
        &self,
        start: E,
        goal: E,
        failed: impl IntoIterator<Item = E>,
        heuristic: H,
    ) -> Result<SearchResult<E>, SearchError>
    where
        H: Heuristic<E>,
    {
        let options = SearchOptions::default().with_banned(failed);
        debug!("Rerouting around {} failed nodes", options.banned.len());

        self.search_with(start, goal, heuristic, &options, Never)
    }

    fn has_reverse_path(&self, source: E, target: E) -> Result<(bool, Weight, Vec<E>), SearchError> {
        let options = SearchOptions::default().without_frames();
        let result = self.search_with(target, source, Zero, &options, Never)?;

        Ok((result.is_found(), result.weight, result.nodes))
    }
}
