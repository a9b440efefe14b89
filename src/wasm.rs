//! Entry points for the browser globe. Points cross the boundary as flat
//! `Float32Array`s (`x, y, z` triples) ready for a line or vertex buffer.

use wasm_bindgen::prelude::*;

use crate::{
    components::{arc::ArcConfig, geo_location::GeoLocation, sphere::SphereModel},
    systems::{arc::ArcSystem, geospatial::coordinates::CoordinatesSystem},
};

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init_logging();
}

#[wasm_bindgen(js_name = projectLocation)]
pub fn project_location(lat: f64, lng: f64, altitude: f64, radius: f64) -> Vec<f32> {
    let location = GeoLocation::new(lat, lng).with_altitude(altitude);
    let p = CoordinatesSystem::project(&location, &SphereModel::new(radius));
    vec![p.x as f32, p.y as f32, p.z as f32]
}

/// Samples an arc between two locations with the default tuning, altitude
/// bounds overridden by the caller.
#[wasm_bindgen(js_name = arcPoints)]
#[allow(clippy::too_many_arguments)]
pub fn arc_points(
    start_lat: f64,
    start_lng: f64,
    end_lat: f64,
    end_lng: f64,
    radius: f64,
    min_altitude: f64,
    max_altitude: f64,
    segments: usize,
) -> Vec<f32> {
    let config = ArcConfig::default().with_altitude_range(min_altitude, max_altitude);
    let arc = ArcSystem::build_arc(
        &GeoLocation::new(start_lat, start_lng),
        &GeoLocation::new(end_lat, end_lng),
        &SphereModel::new(radius),
        &config,
    );
    arc.sample(segments)
        .into_iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
