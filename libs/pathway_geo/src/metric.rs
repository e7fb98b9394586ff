use geo::{Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The distance function used to decide connectivity, snap nodes
/// and report the length of a path.
///
/// ```rust
/// use pathway_geo::{Metric, Point};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
/// assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Straight-line distance on the plane, in coordinate units.
    #[default]
    Euclidean,

    /// Sum of the absolute axis deltas, in coordinate units.
    Manhattan,

    /// Great-circle distance in meters, reading points as `(lng, lat)` degrees.
    Haversine,
}

impl Metric {
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Euclidean => Euclidean.distance(a, b),
            Metric::Manhattan => (a.x() - b.x()).abs() + (a.y() - b.y()).abs(),
            Metric::Haversine => Haversine.distance(a, b),
        }
    }

    /// Whether the metric agrees with the planar euclidean ordering
    /// used by the node R*-tree.
    #[inline]
    pub fn is_planar(&self) -> bool {
        matches!(self, Metric::Euclidean)
    }
}
