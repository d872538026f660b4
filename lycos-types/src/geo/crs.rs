use crate::cartesian::Rect;
use crate::error::LycosTypesError;
use crate::geo::impls::projection::GeodesyProjection;

/// Definition of the French Lambert-93 projection (EPSG:2154) in `geodesy` operator syntax.
///
/// RGF93 is coincident with WGS84 at the precision EPSG publishes, so no datum shift is applied.
pub const LAMBERT93_DEFINITION: &str =
    "lcc lat_1=49 lat_2=44 lat_0=46.5 lon_0=3 x_0=700000 y_0=6600000 ellps=GRS80";

/// Published area of use of EPSG:2154 (lon/lat degrees).
const LAMBERT93_AREA_OF_USE: Rect = Rect::new(-9.86, 41.15, 10.38, 51.56);

/// Margin (in degrees) added around the area of use before geodetic input is rejected.
pub const AREA_OF_USE_MARGIN: f64 = 5.0;

/// Projected coordinate reference system that shapes store their coordinates in.
///
/// The geodetic side is always WGS84 (EPSG:4326). A `Crs` is plain configuration: build the projection from it once
/// with [`Crs::get_projection`] and pass that by reference to everything that converts coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    projection_type: ProjectionType,
    area_of_use: Option<Rect>,
}

/// Projection used by a [`Crs`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// RGF93 / Lambert-93.
    Lambert93,
    /// Any projection given as a `geodesy` operator definition.
    Other(String),
}

impl Crs {
    /// RGF93 / Lambert-93, the projected system of metropolitan France.
    pub const EPSG2154: Crs = Crs {
        projection_type: ProjectionType::Lambert93,
        area_of_use: Some(LAMBERT93_AREA_OF_USE),
    };

    /// Creates a new CRS. If `area_of_use` is set, geodetic coordinates further than [`AREA_OF_USE_MARGIN`] from it
    /// are rejected by the projection.
    pub fn new(projection_type: ProjectionType, area_of_use: Option<Rect>) -> Self {
        Self {
            projection_type,
            area_of_use,
        }
    }

    /// Projection type of the CRS.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Area of use in lon/lat degrees, if any.
    pub fn area_of_use(&self) -> Option<Rect> {
        self.area_of_use
    }

    /// `geodesy` operator definition of the projection.
    pub fn definition(&self) -> &str {
        match &self.projection_type {
            ProjectionType::Lambert93 => LAMBERT93_DEFINITION,
            ProjectionType::Other(definition) => definition,
        }
    }

    /// Builds the projection between WGS84 and this CRS.
    pub fn get_projection(&self) -> Result<GeodesyProjection, LycosTypesError> {
        GeodesyProjection::new(
            self.definition(),
            self.area_of_use.map(|area| area.expand(AREA_OF_USE_MARGIN)),
        )
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::EPSG2154
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn lambert93_definition() {
        assert_eq!(Crs::EPSG2154.definition(), LAMBERT93_DEFINITION);
        assert_eq!(Crs::default(), Crs::EPSG2154);
        assert!(Crs::EPSG2154.get_projection().is_ok());
    }

    #[test]
    fn lambert93_area_of_use() {
        let crs = Crs::EPSG2154;
        assert_eq!(crs.projection_type(), &ProjectionType::Lambert93);

        let area = crs.area_of_use().unwrap();
        assert_eq!(area.x_min(), -9.86);
        assert_eq!(area.y_min(), 41.15);
        assert_eq!(area.x_max(), 10.38);
        assert_eq!(area.y_max(), 51.56);
    }

    #[test]
    fn other_projection() {
        let definition = "tmerc lon_0=3 ellps=GRS80";
        let crs = Crs::new(ProjectionType::Other(definition.into()), None);
        assert_eq!(crs.area_of_use(), None);
        assert_eq!(crs.definition(), definition);

        let projection = crs.get_projection().unwrap();
        assert_eq!(projection.definition(), definition);
    }

    #[test]
    fn invalid_definition() {
        let crs = Crs::new(ProjectionType::Other("no_such_operator".into()), None);
        assert_matches!(crs.get_projection(), Err(LycosTypesError::Projection(_)));
    }
}
