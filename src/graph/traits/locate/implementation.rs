use crate::error::LocateError;
use crate::graph::traits::locate::definition::Locate;
use crate::graph::{Graph, Layout};

use codec::{Entry, Node};

use geo::Point;
use itertools::Either;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::Level;

impl<E> Locate<E> for Graph<E>
where
    E: Entry,
{
    fn scan_node<'a>(&'a self, point: Point) -> Option<(&'a Node<E>, f64)>
    where
        E: 'a,
    {
        let nearest = match self.layout {
            // Every cell is a node, so the enclosing cell's center is exact.
            Layout::Grid(layout) => self
                .index
                .nearest_neighbor(&layout.center(layout.cell_at(point))),
            Layout::Scattered if self.metric.is_planar() => self.index.nearest_neighbor(&point),
            // The R*-tree orders by planar distance, which other metrics
            // need not agree with. Ties keep the earliest node.
            Layout::Scattered => self
                .nodes()
                .map(|node| (node, self.metric.distance(point, node.position)))
                .min_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(node, _)| node),
        }?;

        Some((nearest, self.metric.distance(point, nearest.position)))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    fn scan_nodes<'a>(&'a self, point: Point, distance: f64) -> impl Iterator<Item = &'a Node<E>>
    where
        E: 'a,
    {
        // Negative and NaN distances fall through to the scan, which admits nothing
        if self.metric.is_planar() && distance >= 0.0 {
            Either::Left(self.index.locate_within_distance(point, distance * distance))
        } else {
            Either::Right(
                self.nodes()
                    .filter(move |node| self.metric.distance(point, node.position) <= distance),
            )
        }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    fn locate(&self, point: Point, max_distance: Option<f64>) -> Result<E, LocateError> {
        if let Some(max_distance) = max_distance.filter(|bound| bound.is_nan() || *bound < 0.0) {
            return Err(LocateError::InvalidDistance(max_distance));
        }

        let (node, distance) = self.scan_node(point).ok_or(LocateError::EmptyGraph)?;

        if let (Layout::Scattered, Some(max_distance)) = (self.layout, max_distance) {
            if distance > max_distance {
                debug!("Nearest node {:?} to {point:?} is {distance} away", node.id);
                return Err(LocateError::NotFound {
                    distance,
                    max_distance,
                });
            }
        }

        Ok(node.id)
    }
}
