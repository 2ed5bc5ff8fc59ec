use crate::error::{RegionError, Result};
use crate::math::polygon_2d::{point_in_polygon_2d, signed_area_2d};
use crate::math::Point2;

use super::classify::outline_overlap;
use super::{OverlapCode, Outline, Region, Shape};

/// A simple polygon given by its boundary vertices.
///
/// The vertex list must describe a non-self-intersecting boundary in a
/// consistent winding order and must not repeat the first vertex at the end.
/// Self-intersection is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its boundary vertices.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::InvalidRegion` if there are fewer than 3
    /// vertices or any coordinate is not finite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            tracing::debug!(count = vertices.len(), "rejecting polygon vertex list");
            return Err(RegionError::InvalidRegion(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        if let Some(bad) = vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            tracing::debug!(index = bad, "rejecting non-finite polygon vertex");
            return Err(
                RegionError::InvalidRegion(format!("polygon vertex {bad} is not finite")).into(),
            );
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polygon::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Builds a polygon whose vertices are already known to be valid.
    pub(super) fn from_valid_vertices(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices, which never holds for a
    /// constructed polygon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl Shape for Polygon {
    fn contains_point(&self, point: &Point2) -> bool {
        point_in_polygon_2d(point, &self.vertices)
    }

    fn overlap(&self, other: &Region) -> OverlapCode {
        outline_overlap(self, other)
    }
}

impl Outline for Polygon {
    fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}
