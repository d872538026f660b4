//! Geodetic points (longitude and latitude) (see [`GeoPoint2d`]) and conversion between the geodetic and projected
//! coordinate systems (see [`Projection`] and [`Crs`]).

mod crs;
pub mod impls;
mod traits;

pub use crs::{Crs, ProjectionType, AREA_OF_USE_MARGIN, LAMBERT93_DEFINITION};
pub use impls::projection::GeodesyProjection;
pub use impls::GeoPoint2d;
pub use traits::projection::Projection;
