//! See documentation for [`ShapeKind`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag identifying which shape variant a [`Geometry`](crate::Geometry) represents.
///
/// Serializes to the GeoJSON geometry type name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ShapeKind {
    /// Single position.
    Point,
    /// Open path of two or more positions.
    LineString,
    /// Closed exterior ring of four or more positions.
    Polygon,
}

impl ShapeKind {
    /// Minimum number of coordinates a geometry of this kind must have.
    pub fn min_coords(&self) -> usize {
        match self {
            ShapeKind::Point => 1,
            ShapeKind::LineString => 2,
            ShapeKind::Polygon => 4,
        }
    }

    /// GeoJSON name of the geometry type.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::LineString => "LineString",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_geojson_type() {
        assert_eq!(
            serde_json::to_string(&ShapeKind::LineString).unwrap(),
            "\"LineString\""
        );
        assert_eq!(ShapeKind::Polygon.to_string(), "Polygon");
    }
}
