use tracing::trace;

use crate::math::distance_2d::segment_forms_chord;
use crate::math::intersect_2d::segments_cross_2d;
use crate::math::polygon_2d::edges;
use crate::math::Point2;

use super::{Circle, OverlapCode, Outline, Region, Shape};

/// Relation between a polygonal outline and a circle.
///
/// Unlike [`OverlapCode`], this keeps both containment directions apart so
/// that the circle's side and the polygon's side can each map it to their own
/// coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonCircleRelation {
    /// No shared area.
    Disjoint,
    /// The boundaries cross.
    Partial,
    /// Every polygon vertex lies inside the circle.
    PolygonInCircle,
    /// No polygon vertex lies inside the circle and the circle's center lies
    /// inside the polygon.
    CircleInPolygon,
}

impl PolygonCircleRelation {
    /// Maps the relation to the circle's [`OverlapCode`] (`circle.overlap(polygon)`).
    #[must_use]
    pub fn seen_from_circle(self) -> OverlapCode {
        match self {
            Self::Disjoint => OverlapCode::Disjoint,
            Self::Partial | Self::CircleInPolygon => OverlapCode::Partial,
            Self::PolygonInCircle => OverlapCode::Contained,
        }
    }

    /// Maps the relation to the polygon's [`OverlapCode`] (`polygon.overlap(circle)`).
    #[must_use]
    pub fn seen_from_polygon(self) -> OverlapCode {
        match self {
            Self::Disjoint => OverlapCode::Disjoint,
            Self::Partial | Self::PolygonInCircle => OverlapCode::Partial,
            Self::CircleInPolygon => OverlapCode::Contained,
        }
    }
}

/// Classifies a polygonal outline against a circle.
///
/// # Algorithm
///
/// 1. Count the outline vertices inside the circle. All of them gives
///    `PolygonInCircle`, some of them gives `Partial`.
/// 2. With no vertex inside, a circle center inside the outline gives
///    `CircleInPolygon`.
/// 3. Otherwise any edge forming a chord of the circle gives `Partial`,
///    and no such edge gives `Disjoint`.
///
/// The center test in step 2 uses the outline's own containment, so a
/// rectangle applies its interval test here.
pub fn classify_polygon_circle<P: Outline + ?Sized>(
    polygon: &P,
    circle: &Circle,
) -> PolygonCircleRelation {
    let vertices = polygon.vertices();
    let inside = vertices
        .iter()
        .filter(|v| circle.contains_point(v))
        .count();
    trace!(inside, total = vertices.len(), "vertices inside circle");

    if inside == vertices.len() {
        return PolygonCircleRelation::PolygonInCircle;
    }
    if inside > 0 {
        return PolygonCircleRelation::Partial;
    }
    if polygon.contains_point(circle.center()) {
        return PolygonCircleRelation::CircleInPolygon;
    }

    let center = circle.center();
    if edges(vertices).any(|(vi, vj)| segment_forms_chord(vi, vj, center, circle.radius())) {
        trace!("edge forms chord");
        return PolygonCircleRelation::Partial;
    }
    PolygonCircleRelation::Disjoint
}

/// Classifies how much of outline `b` falls inside outline `a`.
///
/// `Contained` when every vertex of `b` is inside `a`; `Partial` when every
/// vertex of `a` is inside `b` or any pair of edges properly crosses;
/// `Disjoint` otherwise.
///
/// The crossing-number test never counts a polygon's topmost vertex as
/// inside itself, so an outline whose vertex list is a cyclic rotation of
/// `a`'s is reported `Contained` up front.
pub fn classify_polygon_polygon<A, B>(a: &A, b: &B) -> OverlapCode
where
    A: Outline + ?Sized,
    B: Outline + ?Sized,
{
    if same_outline(a.vertices(), b.vertices()) {
        return OverlapCode::Contained;
    }
    if b.vertices().iter().all(|v| a.contains_point(v)) {
        return OverlapCode::Contained;
    }
    if a.vertices().iter().all(|v| b.contains_point(v)) {
        trace!("receiver lies inside the other outline");
        return OverlapCode::Partial;
    }

    let crossing = edges(a.vertices()).any(|(a0, a1)| {
        edges(b.vertices()).any(|(b0, b1)| segments_cross_2d(a0, a1, b0, b1))
    });
    if crossing {
        trace!("edges cross");
        OverlapCode::Partial
    } else {
        OverlapCode::Disjoint
    }
}

/// Returns `true` if `b` lists the same vertices as `a`, starting anywhere.
fn same_outline(a: &[Point2], b: &[Point2]) -> bool {
    a.len() == b.len()
        && (0..b.len()).any(|shift| a.iter().zip(b.iter().cycle().skip(shift)).all(|(p, q)| p == q))
}

/// Overlap of a polygonal outline against any region, from the outline's side.
pub(super) fn outline_overlap<P: Outline + ?Sized>(outline: &P, other: &Region) -> OverlapCode {
    match other {
        Region::Circle(circle) => classify_polygon_circle(outline, circle).seen_from_polygon(),
        Region::Polygon(polygon) => classify_polygon_polygon(outline, polygon),
        Region::Rectangle(rect) => classify_polygon_polygon(outline, rect),
    }
}
