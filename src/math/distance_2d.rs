use super::{cross_2d, Point2};

/// Returns the perpendicular distance from `point` to the infinite line
/// through `a` and `b`, or `None` if `a` and `b` coincide.
#[must_use]
pub fn point_to_line_dist(point: &Point2, a: &Point2, b: &Point2) -> Option<f64> {
    if a == b {
        return None;
    }
    let dir = b - a;
    Some((cross_2d(&dir, &(point - a)) / dir.norm()).abs())
}

/// Returns `true` if the perpendicular foot of `point` on the line through
/// `a` and `b` lies within the closed segment `a → b`.
///
/// Both `(point - a)·(b - a)` and `(point - b)·(a - b)` must be non-negative.
#[must_use]
pub fn projects_onto_segment(point: &Point2, a: &Point2, b: &Point2) -> bool {
    (point - a).dot(&(b - a)) >= 0.0 && (point - b).dot(&(a - b)) >= 0.0
}

/// Chord test: does the segment `a → b` cut into the disk of the circle
/// centered at `center` with the given `radius`?
///
/// The supporting line must come within `radius` of the center and the
/// perpendicular foot must fall between the endpoints. Endpoint containment
/// is not checked here; callers use this once no endpoint is inside the disk.
/// Zero-length segments never form a chord.
#[must_use]
pub fn segment_forms_chord(a: &Point2, b: &Point2, center: &Point2, radius: f64) -> bool {
    let Some(dist) = point_to_line_dist(center, a, b) else {
        return false;
    };
    if dist > radius {
        return false;
    }
    projects_onto_segment(center, a, b)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_dist_perpendicular() {
        let d = point_to_line_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)).unwrap();
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn line_dist_beyond_segment_uses_infinite_line() {
        let d = point_to_line_dist(&p(5.0, -2.0), &p(0.0, 0.0), &p(1.0, 0.0)).unwrap();
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn line_dist_degenerate() {
        assert!(point_to_line_dist(&p(3.0, 4.0), &p(1.0, 1.0), &p(1.0, 1.0)).is_none());
    }

    #[test]
    fn projection_inside_and_outside() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        assert!(projects_onto_segment(&p(1.0, 5.0), &a, &b));
        assert!(projects_onto_segment(&p(0.0, 5.0), &a, &b));
        assert!(!projects_onto_segment(&p(-0.1, 5.0), &a, &b));
        assert!(!projects_onto_segment(&p(2.1, -1.0), &a, &b));
    }

    #[test]
    fn chord_through_disk() {
        assert!(segment_forms_chord(&p(0.5, 3.0), &p(0.5, -3.0), &p(0.0, 0.0), 1.0));
    }

    #[test]
    fn tangent_segment_is_chord() {
        assert!(segment_forms_chord(&p(-2.0, 1.0), &p(2.0, 1.0), &p(0.0, 0.0), 1.0));
    }

    #[test]
    fn line_hits_disk_but_segment_stops_short() {
        // The supporting line x = 0 passes through the center, but the
        // segment ends above the disk.
        assert!(!segment_forms_chord(&p(0.0, 5.0), &p(0.0, 4.0), &p(0.0, 0.0), 1.0));
    }

    #[test]
    fn far_segment_is_not_chord() {
        assert!(!segment_forms_chord(&p(-2.0, 3.0), &p(2.0, 3.0), &p(0.0, 0.0), 1.0));
    }

    #[test]
    fn tiny_segment_still_forms_chord() {
        let s = 1e-11;
        assert!(segment_forms_chord(&p(-s, -s), &p(s, -s), &p(0.0, -1.2 * s), 0.5 * s));
        let d = point_to_line_dist(&p(0.0, -1.2 * s), &p(-s, -s), &p(s, -s)).unwrap();
        assert_relative_eq!(d, 0.2 * s, max_relative = 1e-9);
    }

    #[test]
    fn zero_length_segment_is_not_chord() {
        assert!(!segment_forms_chord(&p(0.5, 0.0), &p(0.5, 0.0), &p(0.0, 0.0), 1.0));
    }
}
