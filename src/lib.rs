pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{MaskGeoError, RegionError, Result};
pub use geometry::{Circle, OverlapCode, Outline, Polygon, Rectangle, Region, Shape};
