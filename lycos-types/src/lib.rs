//! Geometries that keep a single set of projected (Lambert-93) coordinates and derive their geodetic (WGS84)
//! view on demand.
//!
//! ```
//! use lycos_types::geo::Crs;
//! use lycos_types::{Point, Polygon, Shape};
//!
//! let projection = Crs::EPSG2154.get_projection().unwrap();
//! let polygon = Polygon::from_geodetic(
//!     &[(3.0, 46.5), (3.1, 46.5), (3.1, 46.6), (3.0, 46.5)],
//!     &projection,
//! )
//! .unwrap();
//! let point = Point::from_geodetic((3.2, 46.55), &projection).unwrap();
//!
//! let (on_polygon, on_point) = polygon.nearest_points(&point);
//! assert!(polygon.distance(&point) > 0.0);
//! assert_eq!(on_point, point);
//! # let _ = on_polygon;
//! ```

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod geojson;
mod geometry;
pub mod geometry_type;
mod linestring;
mod nearest;
mod point;
mod polygon;

pub use error::LycosTypesError;
pub use geometry::{Geom, Geometry, Shape};
pub use geometry_type::ShapeKind;
pub use linestring::LineString;
pub use point::Point;
pub use polygon::Polygon;
