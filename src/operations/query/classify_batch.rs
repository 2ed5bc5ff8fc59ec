use rayon::prelude::*;

use crate::geometry::{OverlapCode, Region, Shape};

/// Number of regions per overlap outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapTally {
    /// Regions sharing no area with the mask.
    pub disjoint: usize,
    /// Regions partly inside the mask, or swallowing it.
    pub partial: usize,
    /// Regions fully inside the mask.
    pub contained: usize,
}

impl OverlapTally {
    /// Total number of classified regions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.disjoint + self.partial + self.contained
    }

    fn record(mut self, code: OverlapCode) -> Self {
        match code {
            OverlapCode::Disjoint => self.disjoint += 1,
            OverlapCode::Partial => self.partial += 1,
            OverlapCode::Contained => self.contained += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            disjoint: self.disjoint + other.disjoint,
            partial: self.partial + other.partial,
            contained: self.contained + other.contained,
        }
    }
}

/// Classifies many regions against one mask region in parallel.
///
/// Each region is classified as `mask.overlap(region)`. Regions are immutable,
/// so the work is split across the rayon thread pool without locking.
pub struct ClassifyBatch<'a> {
    mask: &'a Region,
    regions: &'a [Region],
}

impl<'a> ClassifyBatch<'a> {
    /// Creates a new `ClassifyBatch` query.
    #[must_use]
    pub fn new(mask: &'a Region, regions: &'a [Region]) -> Self {
        Self { mask, regions }
    }

    /// Executes the query, returning one code per region in input order.
    #[must_use]
    pub fn execute(&self) -> Vec<OverlapCode> {
        tracing::debug!(
            mask = self.mask.kind(),
            count = self.regions.len(),
            "classifying batch"
        );
        self.regions
            .par_iter()
            .map(|region| self.mask.overlap(region))
            .collect()
    }

    /// Executes the query and counts the outcomes.
    #[must_use]
    pub fn tally(&self) -> OverlapTally {
        self.regions
            .par_iter()
            .map(|region| OverlapTally::default().record(self.mask.overlap(region)))
            .reduce(OverlapTally::default, OverlapTally::merge)
    }
}
