use crate::components::geo_location::GeoLocation;

/// Below this `|sin Δ|` the path is treated as undefined: either the two
/// points coincide or they are antipodal.
const DEGENERATE_SIN: f64 = 1e-12;

pub struct GreatCircleSystem {}

impl GreatCircleSystem {
    /// Central angle between two locations in radians. Altitude is ignored.
    pub fn angular_distance(start: &GeoLocation, end: &GeoLocation) -> f64 {
        let (sin_d, cos_d) = central_angle(&unit_vector(start), &unit_vector(end));
        sin_d.atan2(cos_d)
    }

    /// The point a fraction `t` of the way along the shortest great circle
    /// from `start` to `end`. `t` outside `[0, 1]` extrapolates along the
    /// same circle. The result always has altitude 0.
    ///
    /// Coincident and antipodal endpoints have no unique path, so `start`
    /// (at altitude 0) is returned for every `t`.
    pub fn interpolate(start: &GeoLocation, end: &GeoLocation, t: f64) -> GeoLocation {
        let (a0, a1) = (unit_vector(start), unit_vector(end));
        let (k, cos_d) = central_angle(&a0, &a1);
        if k.is_nan() || k < DEGENERATE_SIN {
            return GeoLocation::new(start.latitude, start.longitude);
        }

        let d = k.atan2(cos_d);
        let a = ((1.0 - t) * d).sin() / k;
        let b = (t * d).sin() / k;

        let x = a * a0[0] + b * a1[0];
        let y = a * a0[1] + b * a1[1];
        let z = a * a0[2] + b * a1[2];

        GeoLocation::new(
            z.atan2((x * x + y * y).sqrt()).to_degrees(),
            y.atan2(x).to_degrees(),
        )
    }
}

// Earth-centred unit vector, z through the north pole. Only used for the
// slerp, unrelated to the render frame of `CoordinatesSystem`.
fn unit_vector(location: &GeoLocation) -> [f64; 3] {
    let (lat, lng) = (location.latitude.to_radians(), location.longitude.to_radians());
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}

// (sin Δ, cos Δ) from the cross and dot products. Stays accurate near 0
// and π, where the haversine form loses the small sine.
fn central_angle(a: &[f64; 3], b: &[f64; 3]) -> (f64, f64) {
    let cross = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let sin_d = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
    let cos_d = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    (sin_d, cos_d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_same_place(a: &GeoLocation, b: &GeoLocation) {
        assert!((a.latitude - b.latitude).abs() < EPS, "{a:?} vs {b:?}");
        assert!((a.longitude - b.longitude).abs() < EPS, "{a:?} vs {b:?}");
    }

    #[test]
    fn quarter_of_the_equator() {
        let d = GreatCircleSystem::angular_distance(
            &GeoLocation::new(0.0, 0.0),
            &GeoLocation::new(0.0, 90.0),
        );
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn interpolates_along_the_equator() {
        let a = GeoLocation::new(0.0, 0.0);
        let b = GeoLocation::new(0.0, 90.0);
        assert_same_place(&GreatCircleSystem::interpolate(&a, &b, 0.5), &GeoLocation::new(0.0, 45.0));
        assert_same_place(&GreatCircleSystem::interpolate(&a, &b, 2.0), &GeoLocation::new(0.0, 180.0));
    }

    #[test]
    fn crosses_the_antimeridian_the_short_way() {
        let a = GeoLocation::new(0.0, 170.0);
        let b = GeoLocation::new(0.0, -170.0);
        let mid = GreatCircleSystem::interpolate(&a, &b, 0.5);
        assert!((mid.longitude.abs() - 180.0).abs() < EPS);
    }

    #[test]
    fn meridian_path_passes_over_the_pole() {
        let a = GeoLocation::new(80.0, 0.0);
        let b = GeoLocation::new(80.0, 180.0);
        let mid = GreatCircleSystem::interpolate(&a, &b, 0.5);
        assert!((mid.latitude - 90.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_paths_return_start() {
        let a = GeoLocation::new(10.0, 20.0).with_altitude(3.0);
        let same = GreatCircleSystem::interpolate(&a, &a, 0.25);
        assert_eq!(same, GeoLocation::new(10.0, 20.0));

        let antipode = GeoLocation::new(-10.0, -160.0);
        let undefined = GreatCircleSystem::interpolate(&a, &antipode, 0.75);
        assert_eq!(undefined, GeoLocation::new(10.0, 20.0));
    }

    #[test]
    fn output_altitude_is_zero() {
        let a = GeoLocation::new(0.0, 0.0).with_altitude(2.0);
        let b = GeoLocation::new(10.0, 10.0).with_altitude(2.0);
        assert_eq!(GreatCircleSystem::interpolate(&a, &b, 0.3).altitude, 0.0);
    }
}
