use std::sync::OnceLock;

use crate::error::{RegionError, Result};
use crate::math::Point2;

use super::classify::outline_overlap;
use super::{OverlapCode, Outline, Polygon, Region, Shape};

/// An axis-aligned rectangle given by closed coordinate intervals.
///
/// Point membership is a direct interval test. Overlap queries walk the
/// equivalent counter-clockwise polygon
/// `(xmin, ymin), (xmax, ymin), (xmax, ymax), (xmin, ymax)`, which is built on
/// first use and cached.
#[derive(Debug, Clone)]
pub struct Rectangle {
    x_range: (f64, f64),
    y_range: (f64, f64),
    outline: OnceLock<Polygon>,
}

impl Rectangle {
    /// Creates a rectangle from `(xmin, xmax)` and `(ymin, ymax)`.
    ///
    /// Zero-width or zero-height rectangles are accepted.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::InvalidRegion` if an interval is inverted or a
    /// bound is not finite.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Result<Self> {
        for (axis, (lo, hi)) in [("x", x_range), ("y", y_range)] {
            if !lo.is_finite() || !hi.is_finite() {
                tracing::debug!(axis, lo, hi, "rejecting non-finite rectangle interval");
                return Err(RegionError::InvalidRegion(format!(
                    "rectangle {axis} interval ({lo}, {hi}) is not finite"
                ))
                .into());
            }
            if lo > hi {
                tracing::debug!(axis, lo, hi, "rejecting inverted rectangle interval");
                return Err(RegionError::InvalidRegion(format!(
                    "rectangle {axis} interval ({lo}, {hi}) is inverted"
                ))
                .into());
            }
        }
        Ok(Self {
            x_range,
            y_range,
            outline: OnceLock::new(),
        })
    }

    /// Returns `(xmin, xmax)`.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    /// Returns `(ymin, ymax)`.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.x_range.1 - self.x_range.0) * (self.y_range.1 - self.y_range.0)
    }

    /// Returns the equivalent polygon, building it on first call.
    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        self.outline.get_or_init(|| {
            let (xmin, xmax) = self.x_range;
            let (ymin, ymax) = self.y_range;
            Polygon::from_valid_vertices(vec![
                Point2::new(xmin, ymin),
                Point2::new(xmax, ymin),
                Point2::new(xmax, ymax),
                Point2::new(xmin, ymax),
            ])
        })
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.x_range == other.x_range && self.y_range == other.y_range
    }
}

impl Shape for Rectangle {
    fn contains_point(&self, point: &Point2) -> bool {
        (self.x_range.0..=self.x_range.1).contains(&point.x)
            && (self.y_range.0..=self.y_range.1).contains(&point.y)
    }

    fn overlap(&self, other: &Region) -> OverlapCode {
        outline_overlap(self, other)
    }
}

impl Outline for Rectangle {
    fn vertices(&self) -> &[Point2] {
        self.as_polygon().vertices()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MaskGeoError;
    use crate::geometry::Circle;
    use approx::assert_relative_eq;

    fn rect(x: (f64, f64), y: (f64, f64)) -> Rectangle {
        Rectangle::new(x, y).unwrap()
    }

    #[test]
    fn inverted_interval() {
        let err = Rectangle::new((1.0, 0.0), (0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            MaskGeoError::Region(RegionError::InvalidRegion(_))
        ));
        assert!(Rectangle::new((0.0, 1.0), (2.0, -2.0)).is_err());
        assert!(Rectangle::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
    }

    #[test]
    fn degenerate_interval_allowed() {
        let r = rect((1.0, 1.0), (0.0, 2.0));
        assert_relative_eq!(r.area(), 0.0);
        assert!(r.contains_point(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn derived_polygon_is_counter_clockwise() {
        let r = rect((0.0, 2.0), (-1.0, 3.0));
        let poly = r.as_polygon();
        assert_eq!(poly.vertices()[0], Point2::new(0.0, -1.0));
        assert_eq!(poly.vertices()[1], Point2::new(2.0, -1.0));
        assert_eq!(poly.vertices()[2], Point2::new(2.0, 3.0));
        assert_eq!(poly.vertices()[3], Point2::new(0.0, 3.0));
        assert_relative_eq!(poly.signed_area(), r.area());
        assert_relative_eq!(r.area(), 8.0);
    }

    #[test]
    fn interval_containment_includes_whole_boundary() {
        let r = rect((0.0, 1.0), (0.0, 1.0));
        for (x, y) in [(0.0, 0.5), (1.0, 0.5), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)] {
            assert!(r.contains_point(&Point2::new(x, y)), "({x}, {y})");
        }
        assert!(!r.contains_point(&Point2::new(1.0 + 1e-12, 0.5)));
        assert!(!r.contains_point(&Point2::new(0.5, -0.1)));
    }

    #[test]
    fn equality_ignores_cache() {
        let a = rect((0.0, 1.0), (0.0, 1.0));
        let b = rect((0.0, 1.0), (0.0, 1.0));
        let _ = a.as_polygon();
        assert_eq!(a, b);
        assert_ne!(a, rect((0.0, 2.0), (0.0, 1.0)));
    }

    #[test]
    fn identical_rectangle_is_contained() {
        let r = rect((0.0, 1.0), (0.0, 1.0));
        assert_eq!(r.overlap(&r.clone().into()), OverlapCode::Contained);
    }

    #[test]
    fn rectangle_vs_polygon() {
        let r = rect((-1.0, 1.0), (-1.0, 1.0));
        let inner = Polygon::from_coords(&[(0.0, 0.5), (0.5, -0.5), (-0.5, -0.5)]).unwrap();
        let crossing = Polygon::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 0.5)]).unwrap();
        let outer = Polygon::from_coords(&[(0.0, 10.0), (10.0, -5.0), (-10.0, -5.0)]).unwrap();
        assert_eq!(r.overlap(&inner.into()), OverlapCode::Contained);
        assert_eq!(r.overlap(&crossing.into()), OverlapCode::Partial);
        assert_eq!(r.overlap(&outer.into()), OverlapCode::Partial);
    }

    #[test]
    fn polygon_sharing_corner_is_contained() {
        // The corner (1, 1) is on the boundary, which the interval test includes.
        let r = rect((-1.0, 1.0), (-1.0, 1.0));
        let corner = Polygon::from_coords(&[(1.0, 1.0), (0.0, 0.5), (0.5, 0.0)]).unwrap();
        assert_eq!(r.overlap(&corner.into()), OverlapCode::Contained);
    }

    #[test]
    fn rectangle_vs_circle() {
        let r = rect((-1.0, 1.0), (-1.0, 1.0));
        let small = Circle::new(Point2::new(0.2, 0.2), 0.1).unwrap();
        let big = Circle::new(Point2::origin(), 5.0).unwrap();
        let far = Circle::new(Point2::new(4.0, 0.0), 1.0).unwrap();
        let side = Circle::new(Point2::new(1.5, 0.0), 0.6).unwrap();
        assert_eq!(r.overlap(&small.into()), OverlapCode::Contained);
        assert_eq!(r.overlap(&big.into()), OverlapCode::Partial);
        assert_eq!(r.overlap(&far.into()), OverlapCode::Disjoint);
        assert_eq!(r.overlap(&side.into()), OverlapCode::Partial);
    }

    #[test]
    fn rectangle_vs_rectangle() {
        let r = rect((0.0, 4.0), (0.0, 4.0));
        assert_eq!(
            r.overlap(&rect((1.0, 2.0), (1.0, 2.0)).into()),
            OverlapCode::Contained
        );
        assert_eq!(
            r.overlap(&rect((3.0, 6.0), (3.0, 6.0)).into()),
            OverlapCode::Partial
        );
        assert_eq!(
            r.overlap(&rect((5.0, 6.0), (0.0, 4.0)).into()),
            OverlapCode::Disjoint
        );
        assert_eq!(
            rect((1.0, 2.0), (1.0, 2.0)).overlap(&r.clone().into()),
            OverlapCode::Partial
        );
    }
}
