//! Bounding regions used to lay out occupancy grids.

use crate::GeoError;

use geo::{Intersects, Point, Rect, coord};
use log::debug;

/// An axis-aligned, non-degenerate rectangle.
///
/// ```rust
/// use pathway_geo::{Point, Region};
///
/// let region = Region::around(Point::new(0.0, 0.0), Point::new(4.0, 2.0), 0.25).unwrap();
///
/// // Each side is extended by a quarter of the largest span.
/// assert_eq!(region.width(), 6.0);
/// assert_eq!(region.height(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region(Rect);

impl Region {
    /// Wraps an explicit rectangle, rejecting it if either side has no extent.
    pub fn new(rect: Rect) -> Result<Self, GeoError> {
        let (width, height) = (rect.width(), rect.height());

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GeoError::ZeroSpan { width, height });
        }

        Ok(Region(rect))
    }

    /// Derives the region spanned by `start` and `goal`, extending every side
    /// by `padding` times the larger of the two spans.
    ///
    /// A start and goal on the same row (or column) still produce a usable
    /// region, since the padding is taken from the larger span.
    pub fn around(start: Point, goal: Point, padding: f64) -> Result<Self, GeoError> {
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(GeoError::InvalidPadding(padding));
        }

        let start = crate::validate(start)?;
        let goal = crate::validate(goal)?;

        let width = (start.x() - goal.x()).abs();
        let height = (start.y() - goal.y()).abs();

        let span = width.max(height);
        if span == 0.0 {
            return Err(GeoError::ZeroSpan { width, height });
        }

        let pad = span * padding;
        let min = coord! {
            x: start.x().min(goal.x()) - pad,
            y: start.y().min(goal.y()) - pad,
        };
        let max = coord! {
            x: start.x().max(goal.x()) + pad,
            y: start.y().max(goal.y()) + pad,
        };

        debug!("Padded region {min:?} -> {max:?} (padding {pad})");
        Region::new(Rect::new(min, max))
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.0.height()
    }

    #[inline]
    pub fn min(&self) -> Point {
        Point(self.0.min())
    }

    #[inline]
    pub fn max(&self) -> Point {
        Point(self.0.max())
    }

    /// Whether `point` lies within the region, borders included.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.0.intersects(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_padding_uses_largest_span() {
        let region = Region::around(Point::new(10.0, 5.0), Point::new(0.0, 5.0), 0.1)
            .expect("region must be valid");

        assert_relative_eq!(region.min().x(), -1.0);
        assert_relative_eq!(region.max().x(), 11.0);
        assert_relative_eq!(region.min().y(), 4.0);
        assert_relative_eq!(region.max().y(), 6.0);
    }

    #[test]
    fn test_zero_span_rejected() {
        let point = Point::new(1.0, 1.0);
        assert!(matches!(
            Region::around(point, point, 0.5),
            Err(GeoError::ZeroSpan { .. })
        ));

        let flat = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 5.0, y: 0.0 });
        assert!(Region::new(flat).is_err());
    }

    #[test]
    fn test_contains_borders() {
        let region = Region::new(Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 }))
            .expect("region must be valid");

        assert!(region.contains(Point::new(1.0, 0.5)));
        assert!(region.contains(Point::new(2.0, 1.0)));
        assert!(!region.contains(Point::new(2.5, 0.5)));
        assert!(!region.contains(Point::new(f64::NAN, 0.5)));
    }

    #[test]
    fn test_invalid_padding() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);

        assert_eq!(
            Region::around(a, b, -1.0),
            Err(GeoError::InvalidPadding(-1.0))
        );
        assert!(Region::around(a, Point::new(f64::NAN, 0.0), 0.0).is_err());
    }
}
