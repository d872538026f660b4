use std::fmt::{Debug, Formatter};

use geodesy::prelude::*;

use crate::cartesian::Rect;
use crate::error::LycosTypesError;
use crate::geo::traits::projection::Projection;

/// Projection between WGS84 and a projected CRS, backed by the `geodesy` crate.
///
/// The operator is parsed once on creation. After that the projection is read only, so a single instance can be
/// shared by reference between all shapes and callers.
pub struct GeodesyProjection {
    definition: String,
    context: Minimal,
    op: OpHandle,
    valid_area: Option<Rect>,
}

impl GeodesyProjection {
    /// Creates a projection from a `geodesy` operator definition.
    ///
    /// If `valid_area` (lon/lat degrees) is given, geodetic coordinates outside of it are rejected in both directions.
    pub fn new(definition: &str, valid_area: Option<Rect>) -> Result<Self, LycosTypesError> {
        let mut context = Minimal::new();
        let op = context.op(definition).map_err(|err| {
            LycosTypesError::Projection(format!(
                "invalid projection definition '{definition}': {err}"
            ))
        })?;

        log::debug!("Created projection '{definition}'");

        Ok(Self {
            definition: definition.to_string(),
            context,
            op,
            valid_area,
        })
    }

    /// Operator definition the projection was created from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    fn check_geodetic(&self, lon: f64, lat: f64) -> Result<(), LycosTypesError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(LycosTypesError::Projection(format!(
                "non-finite geodetic coordinate ({lon}, {lat})"
            )));
        }

        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(LycosTypesError::Projection(format!(
                "geodetic coordinate ({lon}, {lat}) is out of range"
            )));
        }

        match self.valid_area {
            Some(area) if !area.contains(lon, lat) => Err(LycosTypesError::Projection(format!(
                "geodetic coordinate ({lon}, {lat}) is outside of the projection area of use"
            ))),
            _ => Ok(()),
        }
    }
}

impl Projection for GeodesyProjection {
    fn geodetic_to_projected(&self, lon: f64, lat: f64) -> Result<(f64, f64), LycosTypesError> {
        self.check_geodetic(lon, lat)?;

        // `geodesy` takes latitude first.
        let mut data = [Coor2D::geo(lat, lon)];
        self.context
            .apply(self.op, Fwd, &mut data)
            .map_err(|err| LycosTypesError::Projection(err.to_string()))?;

        let [x, y] = data[0].0;
        if !x.is_finite() || !y.is_finite() {
            return Err(LycosTypesError::Projection(format!(
                "geodetic coordinate ({lon}, {lat}) cannot be projected"
            )));
        }

        Ok((x, y))
    }

    fn projected_to_geodetic(&self, x: f64, y: f64) -> Result<(f64, f64), LycosTypesError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(LycosTypesError::Projection(format!(
                "non-finite projected coordinate ({x}, {y})"
            )));
        }

        let mut data = [Coor2D([x, y])];
        self.context
            .apply(self.op, Inv, &mut data)
            .map_err(|err| LycosTypesError::Projection(err.to_string()))?;

        let lat = data[0].0[1].to_degrees();
        let lon = data[0].0[0].to_degrees();
        self.check_geodetic(lon, lat).map_err(|_| {
            LycosTypesError::Projection(format!(
                "projected coordinate ({x}, {y}) is outside of the projection domain"
            ))
        })?;

        Ok((lon, lat))
    }
}

impl Debug for GeodesyProjection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeodesyProjection")
            .field("definition", &self.definition)
            .field("valid_area", &self.valid_area)
            .finish()
    }
}
