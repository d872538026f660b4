use crate::cartesian::Point2d;
use crate::error::LycosTypesError;
use crate::geo::Projection;
use crate::geometry::{Geometry, Shape};
use crate::geometry_type::ShapeKind;

/// Polygon given by its exterior ring.
///
/// The ring must be closed (the first position equals the last one) and contain at least four positions. Holes are
/// not supported. Orientation is not constrained.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    geometry: Geometry,
}

impl Polygon {
    /// Creates a polygon from a closed ring of geodetic `(lon, lat)` coordinates.
    pub fn from_geodetic<P>(coords: &[(f64, f64)], projection: &P) -> Result<Self, LycosTypesError>
    where
        P: Projection + ?Sized,
    {
        Ok(Self {
            geometry: Geometry::from_geodetic(ShapeKind::Polygon, coords, projection)?,
        })
    }

    /// Creates a polygon from a closed ring of projected `(x, y)` coordinates.
    pub fn from_projected(coords: &[(f64, f64)]) -> Result<Self, LycosTypesError> {
        Ok(Self {
            geometry: Geometry::from_projected(ShapeKind::Polygon, coords)?,
        })
    }

    /// Exterior ring in projected coordinates.
    pub fn exterior(&self) -> &[Point2d] {
        self.geometry.coords()
    }
}

impl Shape for Polygon {
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
    use crate::geo::{Crs, GeoPoint2d};
    use crate::point::Point;

    const RING: [(f64, f64); 4] = [
        (2.9498291015625, 46.68901548485151),
        (3.00201416015625, 46.62869257083747),
        (3.11187744140625, 46.6701718034738),
        (2.9498291015625, 46.68901548485151),
    ];

    #[test]
    fn minimum_count() {
        assert_matches!(
            Polygon::from_projected(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]),
            Err(LycosTypesError::InvalidGeometry(_))
        );
        assert_matches!(
            Polygon::from_projected(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            Err(LycosTypesError::InvalidGeometry(_))
        );
        assert!(Polygon::from_projected(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).is_ok());

        let projection = Crs::EPSG2154.get_projection().unwrap();
        assert_matches!(
            Polygon::from_geodetic(&RING[..3], &projection),
            Err(LycosTypesError::InvalidGeometry(_))
        );
    }

    #[test]
    fn ring_must_be_closed() {
        assert_matches!(
            Polygon::from_projected(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
            Err(LycosTypesError::InvalidGeometry(_))
        );
    }

    #[test]
    fn geodetic_ring_stays_closed() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        let polygon = Polygon::from_geodetic(&RING, &projection).unwrap();
        let exterior = polygon.exterior();
        assert_eq!(exterior.len(), 4);
        assert_eq!(exterior[0], exterior[3]);

        let view = polygon.geodetic_view(&projection).unwrap();
        for (p, (lon, lat)) in view.iter().zip(RING) {
            assert_abs_diff_eq!(*p, GeoPoint2d::lonlat(lon, lat), epsilon = 1e-6);
        }
    }

    #[test]
    fn sample_point_outside_ring() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        let polygon = Polygon::from_geodetic(&RING, &projection).unwrap();
        let point = Point::from_geodetic((3.03148090839386, 46.63538575294019), &projection).unwrap();

        let (on_polygon, on_point) = polygon.nearest_points(&point);
        assert_abs_diff_eq!(on_point.position(), point.position(), epsilon = 1e-9);
        assert_abs_diff_eq!(
            on_point.geodetic_position(&projection).unwrap(),
            GeoPoint2d::lonlat(3.03148090839386, 46.63538575294019),
            epsilon = 1e-6
        );

        // The point lies south-east of the edge between the second and third vertices.
        let distance = on_polygon.position().distance(&on_point.position());
        assert!(distance > 400.0 && distance < 460.0, "distance: {distance}");

        let b = polygon.exterior()[1];
        let c = polygon.exterior()[2];
        let on_edge = on_polygon.position();
        assert!(on_edge.distance(&b) > 1.0 && on_edge.distance(&c) > 1.0);
        assert_abs_diff_eq!(
            on_edge.distance(&b) + on_edge.distance(&c),
            b.distance(&c),
            epsilon = 1e-6
        );

        let (on_point_rev, on_polygon_rev) = point.nearest_points(&polygon);
        assert_abs_diff_eq!(
            on_point_rev.position().distance(&on_polygon_rev.position()),
            distance,
            epsilon = 1e-6
        );
    }

    #[test]
    fn point_inside_ring() {
        let projection = Crs::EPSG2154.get_projection().unwrap();
        let polygon = Polygon::from_geodetic(&RING, &projection).unwrap();

        let lon = (RING[0].0 + RING[1].0 + RING[2].0) / 3.0;
        let lat = (RING[0].1 + RING[1].1 + RING[2].1) / 3.0;
        let point = Point::from_geodetic((lon, lat), &projection).unwrap();

        let (on_polygon, on_point) = polygon.nearest_points(&point);
        assert_eq!(on_polygon.position().distance(&on_point.position()), 0.0);
        assert_eq!(polygon.distance(&point), 0.0);
        for p in [on_polygon, on_point] {
            assert_abs_diff_eq!(
                p.geodetic_position(&projection).unwrap(),
                GeoPoint2d::lonlat(lon, lat),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn point_on_vertex() {
        let polygon =
            Polygon::from_projected(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]).unwrap();
        let point = Point::from_projected((10.0, 0.0)).unwrap();
        assert_eq!(point.distance(&polygon), 0.0);
        assert_eq!(polygon.distance(&point), 0.0);
    }
}
