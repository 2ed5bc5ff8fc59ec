use super::{cross_2d, Point2};

/// Iterates the edges of a closed polygon as `(vertex[i], vertex[i - 1])` pairs.
///
/// The first edge wraps around: `(vertex[0], vertex[last])`. The vertex list
/// must not repeat its first point at the end.
pub fn edges(points: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (&points[i], &points[(i + n - 1) % n]))
}

/// Even-odd crossing-number point-in-polygon test.
///
/// Casts a ray from `point` towards `+x` and toggles on every edge it crosses.
/// An edge spans the ray when exactly one endpoint has `y <= point.y`, which
/// keeps a vertex shared by two edges from being counted twice. The crossing
/// must lie strictly to the right of `point`.
///
/// Points on the boundary land inside or outside depending on the edge
/// orientation: for a counter-clockwise unit square the left and bottom sides
/// are inside, the right and top sides are outside.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let mut inside = false;
    for (vi, vj) in edges(polygon) {
        let spans = (vi.y <= point.y && point.y < vj.y) || (vj.y <= point.y && point.y < vi.y);
        if !spans {
            continue;
        }
        // `spans` guarantees vi.y != vj.y.
        let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
        if point.x < x_cross {
            inside = !inside;
        }
    }
    inside
}

/// Shoelace area over [`edges`], positive for counter-clockwise winding.
///
/// Fewer than 3 points enclose nothing and sum to zero.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    0.5 * edges(points)
        .map(|(cur, prev)| cross_2d(&prev.coords, &cur.coords))
        .sum::<f64>()
}
