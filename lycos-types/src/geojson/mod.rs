//! Conversion of shapes to and from GeoJSON.
//!
//! GeoJSON always carries the geodetic view of a shape, with positions in `[lon, lat]` order.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, Position, Value};

use crate::error::LycosTypesError;
use crate::geo::Projection;
use crate::geometry::{Geom, Shape};
use crate::geometry_type::ShapeKind;
use crate::linestring::LineString;
use crate::point::Point;
use crate::polygon::Polygon;

/// Serializes shapes into a GeoJSON `FeatureCollection`.
///
/// Every shape becomes a feature with its index as `id` and empty `properties`. An empty input produces an empty
/// collection.
pub fn to_geojson<'a, S>(
    shapes: impl IntoIterator<Item = &'a S>,
    projection: &dyn Projection,
) -> Result<String, LycosTypesError>
where
    S: Shape + ?Sized + 'a,
{
    let features = shapes
        .into_iter()
        .enumerate()
        .map(|(index, shape)| {
            Ok(Feature {
                bbox: None,
                geometry: Some(to_geojson_geometry(shape, projection)?),
                id: Some(Id::String(index.to_string())),
                properties: Some(JsonObject::new()),
                foreign_members: None,
            })
        })
        .collect::<Result<Vec<_>, LycosTypesError>>()?;

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    Ok(GeoJson::FeatureCollection(collection).to_string())
}

/// Converts the geodetic view of a shape into a GeoJSON geometry.
pub fn to_geojson_geometry<S>(
    shape: &S,
    projection: &dyn Projection,
) -> Result<geojson::Geometry, LycosTypesError>
where
    S: Shape + ?Sized,
{
    let mut positions: Vec<Position> = shape
        .geodetic_view(projection)?
        .iter()
        .map(|p| vec![p.lon(), p.lat()])
        .collect();

    let value = match shape.kind() {
        ShapeKind::Point => Value::Point(positions.pop().ok_or_else(|| {
            LycosTypesError::InvalidGeometry("point has no coordinates".to_string())
        })?),
        ShapeKind::LineString => Value::LineString(positions),
        ShapeKind::Polygon => Value::Polygon(vec![positions]),
    };

    Ok(geojson::Geometry::new(value))
}

/// Builds the document under which a shape is stored by the spatially indexed collection:
/// `{"location": {"type": ..., "coordinates": ...}}`.
pub fn location_document(
    shape: &dyn Shape,
    projection: &dyn Projection,
) -> Result<serde_json::Value, LycosTypesError> {
    let geometry = to_geojson_geometry(shape, projection)?;
    let mut document = JsonObject::new();
    document.insert(
        "location".to_string(),
        serde_json::Value::Object(JsonObject::from(&geometry)),
    );
    Ok(serde_json::Value::Object(document))
}

/// Parses shapes from a GeoJSON `FeatureCollection`, `Feature` or bare geometry.
pub fn from_geojson(text: &str, projection: &dyn Projection) -> Result<Vec<Geom>, LycosTypesError> {
    match text.parse::<GeoJson>()? {
        GeoJson::Geometry(geometry) => Ok(vec![from_geojson_geometry(&geometry, projection)?]),
        GeoJson::Feature(feature) => Ok(vec![convert_feature(&feature, projection)?]),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .map(|feature| convert_feature(feature, projection))
            .collect(),
    }
}

/// Converts a GeoJSON geometry into a shape.
///
/// Only the exterior ring of a polygon is kept.
pub fn from_geojson_geometry(
    geometry: &geojson::Geometry,
    projection: &dyn Projection,
) -> Result<Geom, LycosTypesError> {
    match &geometry.value {
        Value::Point(position) => {
            Ok(Point::from_geodetic(convert_position(position)?, projection)?.into())
        }
        Value::LineString(positions) => {
            Ok(LineString::from_geodetic(&convert_positions(positions)?, projection)?.into())
        }
        Value::Polygon(rings) => {
            let Some(exterior) = rings.first() else {
                return Err(LycosTypesError::Conversion(
                    "polygon has no rings".to_string(),
                ));
            };
            if rings.len() > 1 {
                log::warn!("Dropping {} polygon hole(s)", rings.len() - 1);
            }

            Ok(Polygon::from_geodetic(&convert_positions(exterior)?, projection)?.into())
        }
        other => Err(LycosTypesError::Conversion(format!(
            "unsupported geometry type: {}",
            type_name(other)
        ))),
    }
}

fn convert_feature(feature: &Feature, projection: &dyn Projection) -> Result<Geom, LycosTypesError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| LycosTypesError::Conversion("feature has no geometry".to_string()))?;
    from_geojson_geometry(geometry, projection)
}

fn convert_position(position: &Position) -> Result<(f64, f64), LycosTypesError> {
    match position.as_slice() {
        [lon, lat, ..] => Ok((*lon, *lat)),
        _ => Err(LycosTypesError::Conversion(
            "position must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_positions(positions: &[Position]) -> Result<Vec<(f64, f64)>, LycosTypesError> {
    positions.iter().map(convert_position).collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
