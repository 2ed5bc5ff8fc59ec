mod query;

pub use query::{ClassifyBatch, ClassifyOverlap, OverlapTally, PointsInRegion};
