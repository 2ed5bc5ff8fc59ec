use crate::geometry::{OverlapCode, Region, Shape};

/// Classifies how much of `region` falls inside `mask`.
pub struct ClassifyOverlap<'a> {
    mask: &'a Region,
    region: &'a Region,
}

impl<'a> ClassifyOverlap<'a> {
    /// Creates a new `ClassifyOverlap` query.
    #[must_use]
    pub fn new(mask: &'a Region, region: &'a Region) -> Self {
        Self { mask, region }
    }

    /// Executes the query from the mask's side: `mask.overlap(region)`.
    #[must_use]
    pub fn execute(&self) -> OverlapCode {
        self.mask.overlap(self.region)
    }

    /// Executes the query in both directions.
    ///
    /// Returns `(mask.overlap(region), region.overlap(mask))`. The second
    /// value is `Contained` exactly when the mask lies inside the region,
    /// which the first value alone reports as `Partial`.
    #[must_use]
    pub fn execute_both(&self) -> (OverlapCode, OverlapCode) {
        (self.execute(), self.region.overlap(self.mask))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Polygon};
    use crate::math::Point2;

    #[test]
    fn mask_inside_region_is_told_apart_by_reverse_query() {
        let mask: Region = Circle::new(Point2::origin(), 1.0).unwrap().into();
        let square: Region =
            Polygon::from_coords(&[(10.0, 10.0), (-10.0, 10.0), (-10.0, -10.0), (10.0, -10.0)])
                .unwrap()
                .into();
        let query = ClassifyOverlap::new(&mask, &square);
        assert_eq!(query.execute(), OverlapCode::Partial);
        assert_eq!(query.execute_both(), (OverlapCode::Partial, OverlapCode::Contained));
    }

    #[test]
    fn crossing_regions_are_partial_both_ways() {
        let mask: Region = Circle::new(Point2::origin(), 1.0).unwrap().into();
        let other: Region = Circle::new(Point2::new(1.2, 0.0), 0.4).unwrap().into();
        let query = ClassifyOverlap::new(&mask, &other);
        assert_eq!(query.execute_both(), (OverlapCode::Partial, OverlapCode::Partial));
    }
}
