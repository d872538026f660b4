use crate::cartesian::Point2d;
use crate::error::LycosTypesError;
use crate::geo::{GeoPoint2d, Projection};
use crate::geometry::{Geometry, Shape};
use crate::geometry_type::ShapeKind;

/// Point shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    geometry: Geometry,
}

impl Point {
    /// Creates a point from geodetic `(lon, lat)` coordinates.
    pub fn from_geodetic<P>(coords: (f64, f64), projection: &P) -> Result<Self, LycosTypesError>
    where
        P: Projection + ?Sized,
    {
        Ok(Self {
            geometry: Geometry::from_geodetic(ShapeKind::Point, &[coords], projection)?,
        })
    }

    /// Creates a point from projected `(x, y)` coordinates.
    pub fn from_projected(coords: (f64, f64)) -> Result<Self, LycosTypesError> {
        Ok(Self {
            geometry: Geometry::from_projected(ShapeKind::Point, &[coords])?,
        })
    }

    pub(crate) fn from_position(position: Point2d) -> Self {
        Self {
            geometry: Geometry::point(position),
        }
    }

    /// Projected position of the point.
    pub fn position(&self) -> Point2d {
        self.geometry.coords()[0]
    }

    /// Geodetic position of the point.
    pub fn geodetic_position(
        &self,
        projection: &dyn Projection,
    ) -> Result<GeoPoint2d, LycosTypesError> {
        projection.unproject(&self.position())
    }
}

impl Shape for Point {
    fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;
    use crate::cartesian::CartesianPoint2d;
    use crate::geo::Crs;

    #[test]
    fn from_projected_stores_coordinates_unchanged() {
        let point = Point::from_projected((700_123.5, 6_600_456.25)).unwrap();
        assert_eq!(point.kind(), ShapeKind::Point);
        assert_eq!(point.position(), Point2d::new(700_123.5, 6_600_456.25));
        assert_eq!(point.projected_view(), vec![point.position()]);
    }

    #[test]
    fn from_geodetic_normalizes_to_projected() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        let point = Point::from_geodetic((3.0, 46.5), &projection).unwrap();
        assert_abs_diff_eq!(
            point.position(),
            Point2d::new(700_000.0, 6_600_000.0),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            point.geodetic_position(&projection).unwrap(),
            GeoPoint2d::lonlat(3.0, 46.5),
            epsilon = 1e-9
        );
    }

    #[test]
    fn invalid_input() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        assert_matches!(
            Point::from_projected((f64::NAN, 0.0)),
            Err(LycosTypesError::InvalidGeometry(_))
        );
        assert_matches!(
            Point::from_geodetic((f64::NAN, 46.5), &projection),
            Err(LycosTypesError::Projection(_))
        );
        assert_matches!(
            Point::from_geodetic((120.0, 30.0), &projection),
            Err(LycosTypesError::Projection(_))
        );
    }

    #[test]
    fn sample_points() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        let a = Point::from_geodetic((3.03148090839386, 46.63538575294019), &projection).unwrap();
        let b =
            Point::from_geodetic((3.032446503639221, 46.635864594998814), &projection).unwrap();

        let (on_a, on_b) = a.nearest_points(&b);
        assert_eq!(on_a, a);
        assert_eq!(on_b, b);

        let distance = a.distance(&b);
        assert_abs_diff_eq!(distance, a.position().distance(&b.position()));
        assert!(distance > 80.0 && distance < 100.0, "distance: {distance}");

        assert_abs_diff_eq!(
            on_a.geodetic_position(&projection).unwrap(),
            GeoPoint2d::lonlat(3.03148090839386, 46.63538575294019),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            on_b.geodetic_position(&projection).unwrap(),
            GeoPoint2d::lonlat(3.032446503639221, 46.635864594998814),
            epsilon = 1e-6
        );
    }

    #[test]
    fn nearest_points_do_not_alias_inputs() {
        let a = Point::from_projected((0.0, 0.0)).unwrap();
        let b = Point::from_projected((1.0, 1.0)).unwrap();
        let (on_a, _) = a.nearest_points(&b);
        drop(a);
        assert_eq!(on_a.position(), Point2d::new(0.0, 0.0));
    }
}
