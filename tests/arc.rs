use cgmath::{EuclideanSpace, InnerSpace, MetricSpace};
use globe_arcs::{clamp, Arc, ArcConfig, ArcSystem, GeoLocation, GlobeSession, SphereModel};

const EPS: f64 = 1e-9;

fn radius_of(p: &globe_arcs::Point3D) -> f64 {
    p.to_vec().magnitude()
}

fn assert_radii(arc: &Arc, surface: f64, controls: f64) {
    assert!((radius_of(&arc.start_point) - surface).abs() < EPS, "{arc:?}");
    assert!((radius_of(&arc.end_point) - surface).abs() < EPS, "{arc:?}");
    assert!((radius_of(&arc.control_point1) - controls).abs() < EPS, "{arc:?}");
    assert!((radius_of(&arc.control_point2) - controls).abs() < EPS, "{arc:?}");
}

#[test]
fn nearby_endpoints_use_min_altitude() {
    let sphere = SphereModel::new(6.371);
    let config = ArcConfig::default();
    let arc = ArcSystem::build_arc(
        &GeoLocation::new(48.8566, 2.3522),
        &GeoLocation::new(48.8606, 2.3376),
        &sphere,
        &config,
    );
    assert_radii(&arc, 6.371, 6.371 + config.min_altitude);
}

#[test]
fn antipodal_endpoints_use_max_altitude() {
    let sphere = SphereModel::new(6.371);
    let config = ArcConfig::default();
    let arc = ArcSystem::build_arc(
        &GeoLocation::new(10.0, 20.0),
        &GeoLocation::new(-10.0, -160.0),
        &sphere,
        &config,
    );
    assert!((arc.start_point.distance(arc.end_point) - 2.0 * 6.371).abs() < 1e-6);
    assert_radii(&arc, 6.371, 6.371 + config.max_altitude);
}

#[test]
fn identical_endpoints_make_a_small_loop() {
    let sphere = SphereModel::new(6.371);
    let config = ArcConfig::default();
    let a = GeoLocation::new(35.6762, 139.6503);
    let arc = ArcSystem::build_arc(&a, &a, &sphere, &config);

    assert_eq!(arc.start_point, arc.end_point);
    assert_eq!(arc.control_point1, arc.control_point2);
    assert_radii(&arc, 6.371, 6.371 + config.min_altitude);

    // the loop bulges straight up from the surface point
    let up = arc.start_point.to_vec().normalize();
    let control = arc.control_point1.to_vec().normalize();
    assert!((up - control).magnitude() < EPS);

    let peak = arc.point_at(0.5);
    assert!(radius_of(&peak) > 6.371);
    assert!(arc.sample(50).iter().all(|p| radius_of(p).is_finite()));
}

#[test]
fn arc_lies_in_the_great_circle_plane() {
    let sphere = SphereModel::new(6.371);
    let arc = ArcSystem::build_arc(
        &GeoLocation::new(51.5074, 0.1278),
        &GeoLocation::new(40.7128, -74.0060),
        &sphere,
        &ArcConfig::default(),
    );
    let normal = arc.start_point.to_vec().cross(arc.end_point.to_vec()).normalize();
    for p in [arc.control_point1, arc.control_point2] {
        assert!(p.to_vec().dot(normal).abs() < 1e-9);
    }
    for p in arc.sample(20) {
        assert!(p.to_vec().dot(normal).abs() < 1e-9);
    }
}

#[test]
fn london_to_madrid() {
    let sphere = SphereModel::new(6.371);
    let config = ArcConfig {
        min_altitude: 0.4,
        max_altitude: 1.0,
        altitude_scale: 0.75,
        control_fractions: (0.25, 0.75),
    };
    let london = GeoLocation::new(51.5074, 0.1278);
    let madrid = GeoLocation::new(40.4378, -3.8196);

    let arc = ArcSystem::build_arc(&london, &madrid, &sphere, &config);

    let chord = arc.start_point.distance(arc.end_point);
    assert!(chord > 1.1 && chord < 1.5, "chord {chord}");

    let altitude = clamp(chord * 0.75, 0.4, 1.0);
    let expected = if chord * 0.75 >= 1.0 {
        1.0
    } else if chord * 0.75 <= 0.4 {
        0.4
    } else {
        chord * 0.75
    };
    assert_eq!(altitude, expected);
    assert_eq!(ArcSystem::arc_altitude(chord, &config), expected);

    assert_radii(&arc, 6.371, 6.371 + expected);
    assert!(arc.start_point.distance(arc.point_at(0.0)) < EPS);
    assert!(arc.end_point.distance(arc.point_at(1.0)) < EPS);
}

#[test]
fn session_matches_direct_build() {
    let session = GlobeSession::default();
    let a = GeoLocation::new(0.0, 0.0);
    let b = GeoLocation::new(51.5074, 0.1278);
    assert_eq!(
        session.arc(&a, &b),
        ArcSystem::build_arc(&a, &b, session.sphere(), session.arc_config())
    );
}
