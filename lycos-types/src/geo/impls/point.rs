use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth, in degrees.
///
/// Fields are only reachable through named accessors so that longitude and latitude cannot be mixed up by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a point from latitude and longitude.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a point from longitude and latitude.
    pub fn lonlat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `(lon, lat)` tuple, the axis order used by GeoJSON.
    pub fn to_lonlat(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from longitude and latitude values (in degrees).
///
/// ```
/// use lycos_types::lonlat;
///
/// let point = lonlat!(3.0, 46.5);
/// assert_eq!(point.lon(), 3.0);
/// assert_eq!(point.lat(), 46.5);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::geo::GeoPoint2d::lonlat($lon, $lat)
    };
}
