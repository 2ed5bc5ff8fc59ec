use std::f64::consts::PI;

use crate::error::{RegionError, Result};
use crate::math::Point2;

use super::classify::classify_polygon_circle;
use super::{OverlapCode, Region, Shape};

/// A circular region in the plane.
///
/// The boundary is inclusive: a point at exactly `radius` from the center is
/// contained.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::InvalidRegion` if the radius is not a finite
    /// positive number or the center has a non-finite coordinate.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            tracing::debug!(radius, "rejecting circle radius");
            return Err(RegionError::InvalidRegion(format!(
                "circle radius must be finite and positive, got {radius}"
            ))
            .into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            tracing::debug!(x = center.x, y = center.y, "rejecting circle center");
            return Err(RegionError::InvalidRegion(format!(
                "circle center ({}, {}) is not finite",
                center.x, center.y
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circle-circle classification from this circle's side.
    fn overlap_circle(&self, other: &Circle) -> OverlapCode {
        let center_dist = nalgebra::distance(&self.center, &other.center);
        if center_dist >= self.radius + other.radius {
            return OverlapCode::Disjoint;
        }
        if center_dist + other.radius <= self.radius {
            return OverlapCode::Contained;
        }
        OverlapCode::Partial
    }
}

impl Shape for Circle {
    fn contains_point(&self, point: &Point2) -> bool {
        nalgebra::distance(&self.center, point) <= self.radius
    }

    fn overlap(&self, other: &Region) -> OverlapCode {
        match other {
            Region::Circle(circle) => self.overlap_circle(circle),
            Region::Polygon(polygon) => classify_polygon_circle(polygon, self).seen_from_circle(),
            Region::Rectangle(rect) => classify_polygon_circle(rect, self).seen_from_circle(),
        }
    }
}
