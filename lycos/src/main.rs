//! Computes nearest points between shapes and prints them as GeoJSON.
//!
//! Without arguments the built-in sample (a parcel polygon and a point near it) is used. With one argument - path to a
//! `.geojson` file - nearest points are computed between the first feature of the file and every following one.
//!
//! ```shell
//! cargo run -p lycos -- parcels.geojson
//! ```

use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use lycos_types::cartesian::CartesianPoint2d;
use lycos_types::geo::{Crs, Projection};
use lycos_types::geojson::{from_geojson, to_geojson};
use lycos_types::{Geom, Point, Polygon, Shape};

const SAMPLE_PARCEL: [(f64, f64); 4] = [
    (2.9498291015625, 46.68901548485151),
    (3.00201416015625, 46.62869257083747),
    (3.11187744140625, 46.6701718034738),
    (2.9498291015625, 46.68901548485151),
];

const SAMPLE_POINT: (f64, f64) = (3.03148090839386, 46.63538575294019);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let projection = Crs::EPSG2154.get_projection()?;

    let start = Instant::now();
    let shapes = match std::env::args().nth(1) {
        Some(file_name) => {
            let json = std::fs::read_to_string(&file_name)
                .with_context(|| format!("failed to read {file_name}"))?;
            from_geojson(&json, &projection)?
        }
        None => sample_shapes(&projection)?,
    };

    if shapes.len() < 2 {
        return Err(anyhow!("at least two shapes are required, got {}", shapes.len()));
    }
    let (first, rest) = shapes.split_at(1);
    let first = &first[0];

    let mut points = Vec::with_capacity(rest.len() * 2);
    for other in rest {
        let (a, b) = first.nearest_points(other);
        log::info!(
            "Distance between {} and {}: {:.3} m",
            first.kind(),
            other.kind(),
            a.position().distance(&b.position())
        );
        points.push(a);
        points.push(b);
    }

    println!("{}", to_geojson(&points, &projection)?);
    log::info!("Done in {:?}", start.elapsed());

    Ok(())
}

fn sample_shapes(projection: &dyn Projection) -> Result<Vec<Geom>> {
    Ok(vec![
        Polygon::from_geodetic(&SAMPLE_PARCEL, projection)?.into(),
        Point::from_geodetic(SAMPLE_POINT, projection)?.into(),
    ])
}
