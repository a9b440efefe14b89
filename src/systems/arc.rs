use cgmath::MetricSpace;
use tracing::trace;

use crate::components::{
    arc::{Arc, ArcConfig},
    geo_location::GeoLocation,
    sphere::SphereModel,
};

use super::geospatial::{coordinates::CoordinatesSystem, great_circle::GreatCircleSystem};

/// Closed-interval clamp: `num <= min` gives `min`, `num >= max` gives `max`.
///
/// Unlike `f64::clamp` this never panics. With inverted bounds `min` wins,
/// and NaN passes through.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    if num <= min {
        min
    } else if num >= max {
        max
    } else {
        num
    }
}

pub struct ArcSystem {}

impl ArcSystem {
    /// Height of the interior control points for a given chord length.
    pub fn arc_altitude(chord: f64, config: &ArcConfig) -> f64 {
        clamp(
            chord * config.altitude_scale,
            config.min_altitude,
            config.max_altitude,
        )
    }

    /// Cubic Bézier from `start` to `end` that bulges away from the sphere
    /// in proportion to how far apart the endpoints are.
    ///
    /// Endpoint altitudes are ignored: both ends sit on the surface.
    pub fn build_arc(
        start: &GeoLocation,
        end: &GeoLocation,
        sphere: &SphereModel,
        config: &ArcConfig,
    ) -> Arc {
        let start_point = CoordinatesSystem::project(&start.with_altitude(0.0), sphere);
        let end_point = CoordinatesSystem::project(&end.with_altitude(0.0), sphere);

        let chord = start_point.distance(end_point);
        let altitude = Self::arc_altitude(chord, config);

        let (first, second) = config.control_fractions;
        let mid1 = GreatCircleSystem::interpolate(start, end, first).with_altitude(altitude);
        let mid2 = GreatCircleSystem::interpolate(start, end, second).with_altitude(altitude);

        trace!(chord, altitude, ?start, ?end, "built arc");

        Arc {
            start_point,
            end_point,
            control_point1: CoordinatesSystem::project(&mid1, sphere),
            control_point2: CoordinatesSystem::project(&mid2, sphere),
        }
    }
}
