use super::{cross_2d, Point2};

/// Proper crossing test for segments `a0 → a1` and `b0 → b1`.
///
/// Two segments cross when the endpoints of each lie strictly on opposite
/// sides of the other's supporting line, so the sign products of the 2D cross
/// products must both be negative. Touching at an endpoint, collinear overlap
/// and identical segments (in either direction) never count as a crossing.
#[must_use]
pub fn segments_cross_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    if (a0 == b0 && a1 == b1) || (a0 == b1 && a1 == b0) {
        return false;
    }

    let da = a1 - a0;
    let db = b1 - b0;

    let b_sides = cross_2d(&da, &(b0 - a0)) * cross_2d(&da, &(b1 - a0));
    let a_sides = cross_2d(&db, &(a1 - b0)) * cross_2d(&db, &(a0 - b0));
    b_sides < 0.0 && a_sides < 0.0
}
