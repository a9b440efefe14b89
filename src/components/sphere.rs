use crate::error::GlobeError;

/// Earth radius in scene units used by the browser globe (1 unit = 1000 km).
pub const EARTH_RADIUS: f64 = 6.371;

/// The globe every location is projected onto. One per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereModel {
    pub radius: f64,
}

impl SphereModel {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn validate(&self) -> Result<(), GlobeError> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(GlobeError::InvalidRadius(self.radius))
        }
    }
}

impl Default for SphereModel {
    fn default() -> Self {
        Self::new(EARTH_RADIUS)
    }
}
