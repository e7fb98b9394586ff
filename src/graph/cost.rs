//! Per-edge cost functions.
//!
//! The builders weigh every arc they emit through a [`CostFn`]. The
//! provided [`Cost`] strategies cover the common cases, and any
//! `Fn(Point, Point) -> f64` closure may be supplied in their place.
//!
//! ```rust
//! use pathway::graph::{Cost, CostFn};
//! use pathway::{Metric, Point};
//!
//! let (a, b) = (Point::new(0.0, 0.0), Point::new(3.0, 4.0));
//!
//! assert_eq!(Cost::Distance.cost(Metric::Euclidean, a, b), 5.0);
//! assert_eq!(Cost::Hops.cost(Metric::Euclidean, a, b), 1.0);
//! assert_eq!(Cost::Energy { exponent: 2.0 }.cost(Metric::Euclidean, a, b), 25.0);
//! ```

use geo::Point;
use pathway_geo::Metric;
use serde::{Deserialize, Serialize};

pub trait CostFn: Send + Sync {
    /// The cost of travelling from `a` to `b`, given the graph's metric.
    fn cost(&self, metric: Metric, a: Point, b: Point) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cost {
    /// The metric distance between the endpoints.
    #[default]
    Distance,

    /// A unit cost per arc, minimising the number of hops taken.
    Hops,

    /// Radio path-loss energy, `distance ^ exponent`.
    Energy { exponent: f64 },
}

impl CostFn for Cost {
    #[inline]
    fn cost(&self, metric: Metric, a: Point, b: Point) -> f64 {
        match self {
            Cost::Distance => metric.distance(a, b),
            Cost::Hops => 1.0,
            Cost::Energy { exponent } => metric.distance(a, b).powf(*exponent),
        }
    }
}

impl<F> CostFn for F
where
    F: Fn(Point, Point) -> f64 + Send + Sync,
{
    #[inline]
    fn cost(&self, _: Metric, a: Point, b: Point) -> f64 {
        self(a, b)
    }
}
