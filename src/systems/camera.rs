use tracing::debug;

use crate::components::{
    camera::{Camera, CameraUniform},
    viewport::{Viewport, ViewportEvent},
};

/// Distance from the globe centre to the default eye, in scene units.
pub const DEFAULT_EYE_DISTANCE: f32 = 12.0;

pub struct CameraSystem {}

impl CameraSystem {
    /// Looks at the globe centre from `+x`, where longitude 0 meets the
    /// equator, with the north pole up.
    pub fn create_camera(viewport: &Viewport) -> Camera {
        Camera {
            eye: (DEFAULT_EYE_DISTANCE, 0.0, 0.0).into(),
            target: (0.0, 0.0, 0.0).into(),
            up: cgmath::Vector3::unit_y(),
            aspect: viewport.aspect(),
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Next viewport after `event`. Zero-sized resizes (minimised windows)
    /// keep the previous size.
    pub fn apply(viewport: Viewport, event: ViewportEvent) -> Viewport {
        match event {
            ViewportEvent::Resized { width, height } if width > 0 && height > 0 => {
                debug!(width, height, "viewport resized");
                Viewport::new(width, height)
            }
            ViewportEvent::Resized { .. } => viewport,
        }
    }

    pub fn create_uniform(camera: &Camera) -> CameraUniform {
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(camera);
        camera_uniform
    }
}
