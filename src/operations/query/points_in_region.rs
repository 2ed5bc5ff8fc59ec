use rayon::prelude::*;

use crate::geometry::{Region, Shape};
use crate::math::Point2;

/// Tests membership of many points in one region.
pub struct PointsInRegion<'a> {
    region: &'a Region,
    points: &'a [Point2],
}

impl<'a> PointsInRegion<'a> {
    /// Creates a new `PointsInRegion` query.
    #[must_use]
    pub fn new(region: &'a Region, points: &'a [Point2]) -> Self {
        Self { region, points }
    }

    /// Executes the query, returning one flag per point in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<bool> {
        self.points
            .par_iter()
            .map(|p| self.region.contains_point(p))
            .collect()
    }

    /// Number of points inside the region.
    #[must_use]
    pub fn count(&self) -> usize {
        self.points
            .par_iter()
            .filter(|p| self.region.contains_point(p))
            .count()
    }
}
