use crate::error::SearchError;
use crate::graph::Graph;
use crate::search::frontier::Candidate;
use crate::search::record::SearchRecord;
use crate::search::report::{FxIndexMap, backtrack, path_distance};
use crate::search::{Frame, Heuristic, Interrupt, Outcome, SearchOptions, SearchResult};

use codec::{Entry, Node};

use indexmap::map::Entry as Slot;
use log::{debug, info};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Best-first search over a [`Graph`], guided by a [`Heuristic`].
///
/// The frontier is a binary heap without decrease-key. A cheaper
/// rediscovery pushes a second entry for the node, and entries whose
/// `g` exceeds the node's record by the time they are popped are skipped.
///
/// Every node is expanded at most once. Paths are optimal whenever the
/// heuristic is consistent; an admissible but inconsistent estimate may
/// close a node before its cheapest path is known.
pub struct AStar<'g, E, H>
where
    E: Entry,
{
    graph: &'g Graph<E>,
    heuristic: H,
}

/// The state owned by a single search run.
struct Run<E>
where
    E: Entry,
{
    frontier: BinaryHeap<Candidate>,
    records: FxIndexMap<E, SearchRecord>,
    frames: Vec<Frame<E>>,

    expanded: usize,
    generated: usize,
    pushed: usize,
}

impl<E> Run<E>
where
    E: Entry,
{
    fn new() -> Self {
        Self {
            frontier: BinaryHeap::with_capacity(256),
            records: FxIndexMap::default(),
            frames: vec![],
            expanded: 0,
            generated: 0,
            pushed: 0,
        }
    }

    #[inline]
    fn push(&mut self, index: usize, record: SearchRecord) {
        self.pushed += 1;
        self.frontier.push(Candidate {
            f: record.f(),
            g: record.g,
            index,
        });
    }

    /// Closes the run, reconstructing the path to the record at `goal` if one was reached.
    fn finish(self, graph: &Graph<E>, outcome: Outcome, goal: Option<usize>) -> SearchResult<E> {
        let (nodes, weight) = match goal.and_then(|index| Some((index, self.records.get_index(index)?))) {
            Some((index, (_, record))) => (backtrack(&self.records, index), record.g),
            None => (vec![], f64::INFINITY),
        };

        let path = graph.get_line(&nodes);
        let distance = match outcome {
            Outcome::Found => path_distance(&path, graph.metric()),
            _ => f64::INFINITY,
        };

        SearchResult {
            nodes,
            path,
            distance,
            weight,
            frames: self.frames,
            expanded: self.expanded,
            generated: self.generated,
            pushed: self.pushed,
            outcome,
        }
    }
}

impl<'g, E, H> AStar<'g, E, H>
where
    E: Entry,
    H: Heuristic<E>,
{
    pub fn new(graph: &'g Graph<E>, heuristic: H) -> Self {
        Self { graph, heuristic }
    }

    /// Estimates are clamped to be non-negative, `NaN` counts as zero.
    #[inline]
    fn estimate(&self, node: &Node<E>, goal: &Node<E>) -> f64 {
        self.heuristic.estimate(node, goal).max(0.0)
    }

    fn resolve(&self, id: E) -> Result<&'g Node<E>, SearchError> {
        self.graph
            .node(&id)
            .ok_or_else(|| SearchError::UnknownNode(format!("{id:?}")))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = tracing::Level::INFO))]
    pub fn search<I>(
        &self,
        start: E,
        goal: E,
        options: &SearchOptions<E>,
        interrupt: I,
    ) -> Result<SearchResult<E>, SearchError>
    where
        I: Interrupt,
    {
        let start_time = Instant::now();
        let (source, target) = (self.resolve(start)?, self.resolve(goal)?);

        let mut run = Run::new();

        if options.is_banned(&start) || options.is_banned(&goal) {
            debug!("Endpoint of {start:?} -> {goal:?} is banned");
            return Ok(run.finish(self.graph, Outcome::Unreachable, None));
        }

        let origin = SearchRecord::open(None, 0.0, self.estimate(source, target));

        run.records.insert(start, origin);
        run.push(0, origin);

        let outcome = loop {
            if interrupt.interrupted() {
                debug!("Interrupted after {} expansions", run.expanded);
                break (Outcome::Cancelled, None);
            }

            let Some(Candidate { g, index, .. }) = run.frontier.pop() else {
                break (Outcome::Unreachable, None);
            };

            let Some((&id, record)) = run.records.get_index_mut(index) else {
                continue;
            };

            // Superseded by a cheaper entry, or already expanded
            if record.closed || g > record.g {
                continue;
            }

            record.closed = true;
            let current = *record;
            run.expanded += 1;

            if options.record_frames {
                let position = self.resolve(id)?.position;
                run.frames.push(Frame {
                    id,
                    position,
                    g: current.g,
                    h: current.h,
                    f: current.f(),
                    frontier: run.frontier.len(),
                    expanded: run.expanded,
                });
            }

            if id == goal {
                break (Outcome::Found, Some(index));
            }

            for (neighbor, weight) in self.graph.successors(id) {
                if options.is_banned(&neighbor) {
                    continue;
                }

                let tentative = current.g + weight;

                let (slot, record) = match run.records.entry(neighbor) {
                    Slot::Vacant(entry) => {
                        let h = self.estimate(self.resolve(neighbor)?, target);
                        let record = SearchRecord::open(Some(index), tentative, h);

                        run.generated += 1;
                        let slot = entry.index();
                        entry.insert(record);
                        (slot, record)
                    }
                    Slot::Occupied(mut entry) => {
                        // Ties keep the earlier predecessor
                        if entry.get().closed || tentative >= entry.get().g {
                            continue;
                        }

                        let record = SearchRecord::open(Some(index), tentative, entry.get().h);

                        entry.insert(record);
                        (entry.index(), record)
                    }
                };

                run.push(slot, record);
            }
        };

        let (outcome, reached) = outcome;
        let result = run.finish(self.graph, outcome, reached);

        info!(
            "Finished. Search {start:?} -> {goal:?} {outcome} with {} expanded, {} generated in {}ms",
            result.expanded,
            result.generated,
            start_time.elapsed().as_millis()
        );

        Ok(result)
    }
}
