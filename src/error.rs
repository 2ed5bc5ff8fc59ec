use thiserror::Error;

/// Top-level error type for mask region geometry.
#[derive(Debug, Error)]
pub enum MaskGeoError {
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Errors related to constructing or narrowing regions.
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("unsupported region type: expected {expected}, found {found}")]
    UnsupportedRegionType {
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience type alias for results using [`MaskGeoError`].
pub type Result<T> = std::result::Result<T, MaskGeoError>;
