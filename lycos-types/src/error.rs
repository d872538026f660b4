//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum LycosTypesError {
    /// Coordinate sequence does not satisfy the invariants of the shape being constructed.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Coordinate cannot be transformed between the projected and geodetic systems.
    #[error("projection error: {0}")]
    Projection(String),
    /// Input geometry cannot be converted into one of the supported shapes.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Malformed GeoJSON input.
    #[error("failed to parse geojson: {0}")]
    GeoJson(#[from] geojson::Error),
}
