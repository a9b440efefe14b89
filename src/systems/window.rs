use cgmath::{EuclideanSpace, InnerSpace, SquareMatrix};

use crate::components::{
    arc::Point3D, camera::Camera, geo_location::GeoLocation, sphere::SphereModel,
    viewport::Viewport,
};

use super::geospatial::coordinates::CoordinatesSystem;

pub struct WindowSystem {}

impl WindowSystem {
    /// Location on the globe under the screen position `(x, y)` (pixels,
    /// origin top left), or `None` if the ray misses the sphere.
    pub fn pick(
        camera: &Camera,
        viewport: &Viewport,
        x: f32,
        y: f32,
        sphere: &SphereModel,
    ) -> Option<GeoLocation> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }
        let (view_proj_matrix, _, _) = camera.build_view_projection_matrix();
        let inverse = view_proj_matrix.invert()?;

        let ndc_x = (x * 2.0) / viewport.width as f32 - 1.0;
        let ndc_y = 1.0 - (2.0 * y) / viewport.height as f32;

        // Unproject the same pixel on the near and far planes.
        let near = inverse * cgmath::Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far = inverse * cgmath::Vector4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        let origin = near.cast::<f64>()?;
        let direction = (far - near).cast::<f64>()?.normalize();
        let t = Self::ray_sphere_intersection(origin, direction, sphere.radius)?;

        let hit = Point3D::from_vec(origin + direction * t);
        Some(CoordinatesSystem::unproject(&hit, sphere).with_altitude(0.0))
    }

    /// Nearest non-negative `t` where `origin + t * direction` meets a sphere
    /// of `radius` at the origin. `direction` must be normalised.
    pub fn ray_sphere_intersection(
        origin: cgmath::Vector3<f64>,
        direction: cgmath::Vector3<f64>,
        radius: f64,
    ) -> Option<f64> {
        let b = 2.0 * origin.dot(direction);
        let c = origin.dot(origin) - radius * radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b - discriminant_sqrt) / 2.0;
        let t2 = (-b + discriminant_sqrt) / 2.0;
        if t1 >= 0.0 {
            Some(t1)
        } else if t2 >= 0.0 {
            Some(t2)
        } else {
            None
        }
    }
}
