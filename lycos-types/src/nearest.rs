//! Nearest pair of positions between two geometries, computed in projected space.
//!
//! Segment and containment primitives are delegated to the `geo` crate, working on a copy of the geometry's
//! coordinate buffer.

use ::geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use ::geo::{Closest, ClosestPoint, Coord, Intersects, Line};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::geometry::Geometry;
use crate::geometry_type::ShapeKind;

enum Primitive {
    Point(Coord<f64>),
    LineString(::geo::LineString<f64>),
    Polygon(::geo::Polygon<f64>),
}

impl Primitive {
    fn new(geometry: &Geometry) -> Self {
        let coords: Vec<Coord<f64>> = geometry.coords().iter().map(|&p| p.into()).collect();
        match geometry.kind() {
            ShapeKind::Point => Primitive::Point(coords[0]),
            ShapeKind::LineString => Primitive::LineString(::geo::LineString::new(coords)),
            ShapeKind::Polygon => {
                Primitive::Polygon(::geo::Polygon::new(::geo::LineString::new(coords), vec![]))
            }
        }
    }

    fn vertices(&self) -> &[Coord<f64>] {
        match self {
            Primitive::Point(coord) => std::slice::from_ref(coord),
            Primitive::LineString(line_string) => &line_string.0,
            Primitive::Polygon(polygon) => &polygon.exterior().0,
        }
    }

    fn segments(&self) -> Vec<Line<f64>> {
        match self {
            Primitive::Point(_) => vec![],
            Primitive::LineString(line_string) => line_string.lines().collect(),
            Primitive::Polygon(polygon) => polygon.exterior().lines().collect(),
        }
    }

    /// Position of the primitive closest to `coord`. For a polygon, a coordinate inside the ring is its own closest
    /// position.
    fn closest_to(&self, coord: Coord<f64>) -> Coord<f64> {
        let point = ::geo::Point::from(coord);
        let closest = match self {
            Primitive::Point(position) => return *position,
            Primitive::LineString(line_string) => line_string.closest_point(&point),
            Primitive::Polygon(polygon) => {
                if polygon.intersects(&coord) {
                    return coord;
                }
                polygon.exterior().closest_point(&point)
            }
        };

        match closest {
            Closest::Intersection(p) | Closest::SinglePoint(p) => p.0,
            // Only happens when every segment has zero length, so all vertices coincide.
            Closest::Indeterminate => self.vertices()[0],
        }
    }
}

struct Candidate {
    on_a: Point2d,
    on_b: Point2d,
    distance: f64,
}

fn update(best: &mut Option<Candidate>, on_a: Coord<f64>, on_b: Coord<f64>) {
    let (on_a, on_b) = (Point2d::from(on_a), Point2d::from(on_b));
    let distance = on_a.distance(&on_b);
    if best.as_ref().map_or(true, |b| distance < b.distance) {
        *best = Some(Candidate {
            on_a,
            on_b,
            distance,
        });
    }
}

fn first_crossing(a: &Primitive, b: &Primitive) -> Option<Coord<f64>> {
    let b_segments = b.segments();
    a.segments().into_iter().find_map(|segment_a| {
        b_segments
            .iter()
            .find_map(|&segment_b| match line_intersection(segment_a, segment_b)? {
                LineIntersection::SinglePoint { intersection, .. } => Some(intersection),
                LineIntersection::Collinear { intersection } => Some(intersection.start),
            })
    })
}

/// Returns the pair of positions `(on_a, on_b)` with the smallest planar distance.
///
/// Candidates are checked in a fixed order: vertices of `a` against `b`, then vertices of `b` against `a`, then
/// crossings of the two boundaries. The first candidate with the strictly smallest distance wins, so the result is
/// deterministic for the same input.
pub(crate) fn nearest_positions(a: &Geometry, b: &Geometry) -> (Point2d, Point2d) {
    let primitive_a = Primitive::new(a);
    let primitive_b = Primitive::new(b);

    let mut best = None;
    for &vertex in primitive_a.vertices() {
        update(&mut best, vertex, primitive_b.closest_to(vertex));
        if best.as_ref().is_some_and(|c: &Candidate| c.distance == 0.0) {
            break;
        }
    }

    if best.as_ref().map_or(true, |c| c.distance > 0.0) {
        for &vertex in primitive_b.vertices() {
            update(&mut best, primitive_a.closest_to(vertex), vertex);
        }
    }

    let result = match best {
        Some(candidate) if candidate.distance > 0.0 => {
            match first_crossing(&primitive_a, &primitive_b) {
                Some(crossing) => (Point2d::from(crossing), Point2d::from(crossing)),
                None => (candidate.on_a, candidate.on_b),
            }
        }
        Some(candidate) => (candidate.on_a, candidate.on_b),
        // Geometries always have at least one vertex.
        None => (a.coords()[0], b.coords()[0]),
    };

    log::debug!(
        "Nearest points between {} and {}: {:?}, {:?} ({:.3} m)",
        a.kind(),
        b.kind(),
        result.0,
        result.1,
        result.0.distance(&result.1)
    );

    result
}
