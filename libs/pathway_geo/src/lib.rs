//! Geometric primitives shared by the `pathway` crates.
//!
//! A coordinate is a [`geo::Point`], read as `(x, y)` on a plane or as
//! `(longitude, latitude)` when paired with the [`Metric::Haversine`] metric.

#[doc(hidden)]
pub mod error;
pub mod metric;
pub mod region;

#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use metric::Metric;
#[doc(inline)]
pub use region::Region;

/// Re-exported so downstream crates name the same coordinate type.
pub use geo::Point;

/// Rejects coordinates which contain a non-finite component.
pub fn validate(point: Point) -> Result<Point, GeoError> {
    if point.x().is_finite() && point.y().is_finite() {
        Ok(point)
    } else {
        Err(GeoError::InvalidCoordinate(format!(
            "Coordinate components must be finite. Given: ({}, {})",
            point.x(),
            point.y()
        )))
    }
}
