use crate::error::LycosTypesError;
use crate::geo::Projection;
use crate::geometry::{Geometry, Shape};
use crate::geometry_type::ShapeKind;

/// Open path through two or more positions. The order of the positions defines the path.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    geometry: Geometry,
}

impl LineString {
    /// Creates a line string from geodetic `(lon, lat)` coordinates.
    pub fn from_geodetic<P>(coords: &[(f64, f64)], projection: &P) -> Result<Self, LycosTypesError>
    where
        P: Projection + ?Sized,
    {
        Ok(Self {
            geometry: Geometry::from_geodetic(ShapeKind::LineString, coords, projection)?,
        })
    }

    /// Creates a line string from projected `(x, y)` coordinates.
    pub fn from_projected(coords: &[(f64, f64)]) -> Result<Self, LycosTypesError> {
        Ok(Self {
            geometry: Geometry::from_projected(ShapeKind::LineString, coords)?,
        })
    }
}

impl Shape for LineString {
    fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}
