//! Path reconstruction from the records of a finished run.

use crate::search::record::SearchRecord;

use codec::Entry;
use indexmap::IndexMap;
use pathway_geo::Metric;

use geo::Point;
use itertools::Itertools;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Follows the predecessors of the record at `index` back to the start,
/// returning the identifiers in start-to-goal order.
pub(crate) fn backtrack<E>(records: &FxIndexMap<E, SearchRecord>, index: usize) -> Vec<E>
where
    E: Entry,
{
    let mut path = std::iter::successors(Some(index), |current| {
        records
            .get_index(*current)
            .and_then(|(_, record)| record.parent)
    })
    // Predecessors form a tree, no walk is longer than the record count
    .take(records.len())
    .filter_map(|current| records.get_index(current).map(|(node, _)| *node))
    .collect::<Vec<_>>();

    path.reverse();
    path
}

/// The length of a polyline, summing each consecutive segment under `metric`.
///
/// ```rust
/// use pathway::search::path_distance;
/// use pathway::{Metric, Point};
///
/// let path = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 6.0)];
/// assert_eq!(path_distance(&path, Metric::Euclidean), 7.0);
/// assert_eq!(path_distance(&path[..1], Metric::Euclidean), 0.0);
/// ```
pub fn path_distance(path: &[Point], metric: Metric) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| metric.distance(*a, *b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::PointId;

    fn record(parent: Option<usize>, g: f64) -> SearchRecord {
        SearchRecord::open(parent, g, 0.0)
    }

    #[test]
    fn backtrack_follows_parents() {
        let mut records = FxIndexMap::default();
        records.insert(PointId(7), record(None, 0.0));
        records.insert(PointId(3), record(Some(0), 1.0));
        records.insert(PointId(9), record(Some(0), 4.0));
        records.insert(PointId(1), record(Some(1), 2.0));

        assert_eq!(
            backtrack(&records, 3),
            vec![PointId(7), PointId(3), PointId(1)]
        );
        assert_eq!(backtrack(&records, 0), vec![PointId(7)]);
    }
}
