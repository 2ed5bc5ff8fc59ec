mod circle;
mod classify;
mod polygon;
mod rectangle;
mod region;

use std::fmt;

pub use circle::Circle;
pub use classify::{classify_polygon_circle, classify_polygon_polygon, PolygonCircleRelation};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use region::Region;

use crate::math::Point2;

/// Result of a region-vs-region overlap query.
///
/// Answers "how much of `other` falls inside `self`": none, some, or all.
/// A receiver that is itself swallowed by `other` reports [`OverlapCode::Partial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapCode {
    /// The regions share no area.
    Disjoint,
    /// Some but not all of `other` lies inside `self`, or `self` lies inside `other`.
    Partial,
    /// All of `other` lies inside `self`.
    Contained,
}

impl OverlapCode {
    /// Returns the integer coding used by mask consumers: 0, 1 or 2.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Disjoint => 0,
            Self::Partial => 1,
            Self::Contained => 2,
        }
    }
}

impl fmt::Display for OverlapCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disjoint => "disjoint",
            Self::Partial => "partial",
            Self::Contained => "contained",
        };
        f.write_str(name)
    }
}

/// Point membership and overlap classification for a 2D region.
pub trait Shape {
    /// Returns `true` if `point` lies inside the region.
    fn contains_point(&self, point: &Point2) -> bool;

    /// Classifies how much of `other` lies inside `self`.
    ///
    /// The result is directional: `a.overlap(b)` is `Contained` only when `b`
    /// is fully inside `a`. Use `b.overlap(a)` for the reverse question.
    fn overlap(&self, other: &Region) -> OverlapCode;
}

/// A region bounded by a closed vertex list.
///
/// Edge `i` runs from `vertices()[i]` to `vertices()[i - 1]`, wrapping at 0.
/// Algorithms that need point membership call the implementor's own
/// [`Shape::contains_point`], so a specialized containment test is honored
/// everywhere.
pub trait Outline: Shape {
    /// Returns the boundary vertices, without a repeated closing point.
    fn vertices(&self) -> &[Point2];
}
