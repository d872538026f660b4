use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::error::LycosTypesError;
use crate::geo::{GeoPoint2d, Projection};
use crate::geometry_type::ShapeKind;
use crate::linestring::LineString;
use crate::nearest;
use crate::point::Point;
use crate::polygon::Polygon;

/// Coordinates of a shape together with the tag of the shape variant.
///
/// Projected coordinates are the only stored representation. Geodetic coordinates are derived from them on every
/// request, so the two views can never drift apart. The value is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    coords: Vec<Point2d>,
    kind: ShapeKind,
}

impl Geometry {
    /// Validates the coordinates against the invariants of `kind` and stores them unchanged.
    pub(crate) fn new(kind: ShapeKind, coords: Vec<Point2d>) -> Result<Self, LycosTypesError> {
        if coords.len() < kind.min_coords() {
            return Err(LycosTypesError::InvalidGeometry(format!(
                "{kind} requires at least {} coordinates, got {}",
                kind.min_coords(),
                coords.len()
            )));
        }

        if kind == ShapeKind::Point && coords.len() != 1 {
            return Err(LycosTypesError::InvalidGeometry(format!(
                "point must have exactly one coordinate, got {}",
                coords.len()
            )));
        }

        if let Some(index) = coords.iter().position(|p| !p.is_finite()) {
            return Err(LycosTypesError::InvalidGeometry(format!(
                "coordinate {index} of {kind} is not finite: {:?}",
                coords[index]
            )));
        }

        if kind == ShapeKind::Polygon {
            let first = &coords[0];
            let last = &coords[coords.len() - 1];
            if !first.equal(last) {
                return Err(LycosTypesError::InvalidGeometry(
                    "polygon ring is not closed".to_string(),
                ));
            }
        }

        Ok(Self { coords, kind })
    }

    /// Projects every geodetic `(lon, lat)` coordinate and validates the result.
    pub(crate) fn from_geodetic<P>(
        kind: ShapeKind,
        coords: &[(f64, f64)],
        projection: &P,
    ) -> Result<Self, LycosTypesError>
    where
        P: Projection + ?Sized,
    {
        let projected = coords
            .iter()
            .map(|&(lon, lat)| projection.geodetic_to_projected(lon, lat).map(Point2d::from))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kind, projected)
    }

    pub(crate) fn from_projected(
        kind: ShapeKind,
        coords: &[(f64, f64)],
    ) -> Result<Self, LycosTypesError> {
        Self::new(kind, coords.iter().copied().map(Point2d::from).collect())
    }

    /// Point geometry at a position that is already known to be valid.
    pub(crate) fn point(position: Point2d) -> Self {
        Self {
            coords: vec![position],
            kind: ShapeKind::Point,
        }
    }

    /// Shape variant of the geometry.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Stored projected coordinates.
    pub fn coords(&self) -> &[Point2d] {
        &self.coords
    }

    /// Copy of the projected coordinates.
    pub fn projected_view(&self) -> Vec<Point2d> {
        self.coords.clone()
    }

    /// Geodetic coordinates, computed from the projected ones on every call.
    pub fn geodetic_view<P>(&self, projection: &P) -> Result<Vec<GeoPoint2d>, LycosTypesError>
    where
        P: Projection + ?Sized,
    {
        self.coords.iter().map(|p| projection.unproject(p)).collect()
    }

    /// Pair of points, the first on (or inside) this geometry and the second on (or inside) `other`, with the
    /// smallest planar distance between them.
    pub fn nearest_points(&self, other: &Geometry) -> (Point, Point) {
        let (on_self, on_other) = nearest::nearest_positions(self, other);
        (Point::from_position(on_self), Point::from_position(on_other))
    }

    /// Planar distance (in meters) between this geometry and `other`.
    pub fn distance(&self, other: &Geometry) -> f64 {
        let (on_self, on_other) = nearest::nearest_positions(self, other);
        on_self.distance(&on_other)
    }
}

/// Common interface of all shape variants.
///
/// The trait is used as `dyn Shape` (see [`Shape::nearest_points`]), so its methods take the projection as
/// `&dyn Projection` instead of a generic parameter. Constructors and [`Geometry::geodetic_view`] accept both
/// `&GeodesyProjection` and `&dyn Projection`.
///
/// [`GeodesyProjection`]: crate::geo::GeodesyProjection
pub trait Shape {
    /// Underlying geometry.
    fn geometry(&self) -> &Geometry;

    /// Shape variant.
    fn kind(&self) -> ShapeKind {
        self.geometry().kind()
    }

    /// Copy of the projected coordinates.
    fn projected_view(&self) -> Vec<Point2d> {
        self.geometry().projected_view()
    }

    /// Geodetic coordinates, recomputed on every call.
    fn geodetic_view(
        &self,
        projection: &dyn Projection,
    ) -> Result<Vec<GeoPoint2d>, LycosTypesError> {
        self.geometry().geodetic_view(projection)
    }

    /// See [`Geometry::nearest_points`].
    fn nearest_points(&self, other: &dyn Shape) -> (Point, Point) {
        self.geometry().nearest_points(other.geometry())
    }

    /// See [`Geometry::distance`].
    fn distance(&self, other: &dyn Shape) -> f64 {
        self.geometry().distance(other.geometry())
    }
}

/// Any of the supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
}

impl Shape for Geom {
    fn geometry(&self) -> &Geometry {
        match self {
            Geom::Point(v) => v.geometry(),
            Geom::LineString(v) => v.geometry(),
            Geom::Polygon(v) => v.geometry(),
        }
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
