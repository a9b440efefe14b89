use cgmath::{EuclideanSpace, InnerSpace};

use crate::components::{arc::Point3D, geo_location::GeoLocation, sphere::SphereModel};

pub struct CoordinatesSystem {}

impl CoordinatesSystem {
    /// Lat/lon/altitude to a point in the sphere's frame.
    ///
    /// North pole is `+y`, longitude 0 on the equator is `+x` and longitude
    /// -90 is `+z`. Poles collapse to `(0, ±r, 0)` for any longitude.
    pub fn project(location: &GeoLocation, sphere: &SphereModel) -> Point3D {
        let r = sphere.radius + location.altitude;
        let phi = (90.0 - location.latitude).to_radians();
        let theta = (location.longitude + 180.0).to_radians();

        let x = -r * phi.sin() * theta.cos();
        let y = r * phi.cos();
        let z = r * phi.sin() * theta.sin();

        Point3D::new(x, y, z)
    }

    /// Inverse of [`CoordinatesSystem::project`]. Longitude comes back in
    /// `(-180, 180]`; at the poles it is arbitrary.
    pub fn unproject(point: &Point3D, sphere: &SphereModel) -> GeoLocation {
        let r = point.to_vec().magnitude();
        if r == 0.0 {
            return GeoLocation::default().with_altitude(-sphere.radius);
        }

        let latitude = (point.y / r).clamp(-1.0, 1.0).asin().to_degrees();
        let theta = point.z.atan2(-point.x).to_degrees();
        let mut longitude = theta - 180.0;
        if longitude <= -180.0 {
            longitude += 360.0;
        }

        GeoLocation {
            latitude,
            longitude,
            altitude: r - sphere.radius,
        }
    }
}
