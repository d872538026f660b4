use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::error::LycosTypesError;
use crate::geo::GeoPoint2d;

/// Conversion between the geodetic (lon/lat) and projected (x/y) coordinate systems.
///
/// Tuple based methods are the primitives. Both take and return geodetic coordinates in `(lon, lat)` order,
/// whatever axis order the underlying engine uses.
pub trait Projection {
    /// Converts geodetic `(lon, lat)` into projected `(x, y)`.
    fn geodetic_to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64), LycosTypesError>;

    /// Converts projected `(x, y)` into geodetic `(lon, lat)`.
    fn projected_to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), LycosTypesError>;

    /// Projects a geodetic point.
    fn project(&self, point: &GeoPoint2d) -> Result<Point2d, LycosTypesError> {
        let (x, y) = self.geodetic_to_projected(point.lon(), point.lat())?;
        Ok(Point2d::new(x, y))
    }

    /// Unprojects a projected point.
    fn unproject(&self, point: &Point2d) -> Result<GeoPoint2d, LycosTypesError> {
        let (lon, lat) = self.projected_to_geodetic(point.x(), point.y())?;
        Ok(GeoPoint2d::lonlat(lon, lat))
    }
}
