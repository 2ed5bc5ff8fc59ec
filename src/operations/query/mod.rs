mod classify_batch;
mod classify_overlap;
mod points_in_region;

pub use classify_batch::{ClassifyBatch, OverlapTally};
pub use classify_overlap::ClassifyOverlap;
pub use points_in_region::PointsInRegion;
