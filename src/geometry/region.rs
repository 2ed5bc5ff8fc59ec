use crate::error::{RegionError, Result};
use crate::math::Point2;

use super::{Circle, OverlapCode, Outline, Polygon, Rectangle, Shape};

/// Any mask region: a circle, a polygon, or an axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// A disk with inclusive boundary.
    Circle(Circle),
    /// A simple polygon.
    Polygon(Polygon),
    /// An axis-aligned rectangle.
    Rectangle(Rectangle),
}

impl Region {
    /// Returns the variant name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Polygon(_) => "polygon",
            Self::Rectangle(_) => "rectangle",
        }
    }

    /// Narrows to a circle.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnsupportedRegionType` for polygonal regions.
    pub fn as_circle(&self) -> Result<&Circle> {
        match self {
            Self::Circle(circle) => Ok(circle),
            Self::Polygon(_) | Self::Rectangle(_) => Err(RegionError::UnsupportedRegionType {
                expected: "circle",
                found: self.kind(),
            }
            .into()),
        }
    }

    /// Narrows to a polygonal outline (polygon or rectangle).
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnsupportedRegionType` for circles.
    pub fn as_outline(&self) -> Result<&dyn Outline> {
        match self {
            Self::Polygon(polygon) => Ok(polygon),
            Self::Rectangle(rect) => Ok(rect),
            Self::Circle(_) => Err(RegionError::UnsupportedRegionType {
                expected: "polygon or rectangle",
                found: self.kind(),
            }
            .into()),
        }
    }

    /// Returns the region's vertices as an owned polygon.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnsupportedRegionType` for circles.
    pub fn to_polygon(&self) -> Result<Polygon> {
        match self {
            Self::Polygon(polygon) => Ok(polygon.clone()),
            Self::Rectangle(rect) => Ok(rect.as_polygon().clone()),
            Self::Circle(_) => Err(RegionError::UnsupportedRegionType {
                expected: "polygon or rectangle",
                found: self.kind(),
            }
            .into()),
        }
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(circle) => circle.area(),
            Self::Polygon(polygon) => polygon.area(),
            Self::Rectangle(rect) => rect.area(),
        }
    }
}

impl Shape for Region {
    fn contains_point(&self, point: &Point2) -> bool {
        match self {
            Self::Circle(circle) => circle.contains_point(point),
            Self::Polygon(polygon) => polygon.contains_point(point),
            Self::Rectangle(rect) => rect.contains_point(point),
        }
    }

    fn overlap(&self, other: &Region) -> OverlapCode {
        match self {
            Self::Circle(circle) => circle.overlap(other),
            Self::Polygon(polygon) => polygon.overlap(other),
            Self::Rectangle(rect) => rect.overlap(other),
        }
    }
}

impl From<Circle> for Region {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polygon> for Region {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Rectangle> for Region {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}
