use cgmath::{EuclideanSpace, Point3};

use crate::error::GlobeError;

/// A point in the sphere's local frame, origin at the sphere centre,
/// +y through the north pole.
pub type Point3D = Point3<f64>;

/// A cubic Bézier curve from `start_point` to `end_point`, bent outward by
/// the two interior control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start_point: Point3D,
    pub end_point: Point3D,
    pub control_point1: Point3D,
    pub control_point2: Point3D,
}

impl Arc {
    /// Start, first control, second control, end.
    pub fn control_points(&self) -> [Point3D; 4] {
        [
            self.start_point,
            self.control_point1,
            self.control_point2,
            self.end_point,
        ]
    }

    /// Evaluates the curve at `t`. `t` outside `[0, 1]` is not clamped.
    pub fn point_at(&self, t: f64) -> Point3D {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;

        Point3D::from_vec(
            self.start_point.to_vec() * b0
                + self.control_point1.to_vec() * b1
                + self.control_point2.to_vec() * b2
                + self.end_point.to_vec() * b3,
        )
    }

    /// `segments + 1` points at uniform parameter steps, start and end included.
    pub fn sample(&self, segments: usize) -> Vec<Point3D> {
        if segments == 0 {
            return vec![self.start_point];
        }
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

/// Tuning for how far arcs bulge away from the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfig {
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// Multiplier applied to the chord length before clamping.
    pub altitude_scale: f64,
    /// Great-circle fractions used for the two interior control points.
    pub control_fractions: (f64, f64),
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            min_altitude: 0.4,
            max_altitude: 1.0,
            altitude_scale: 0.75,
            control_fractions: (0.25, 0.75),
        }
    }
}

impl ArcConfig {
    /// Tall arcs, clamped to `[2, 20]`.
    pub fn high_arcs() -> Self {
        Self {
            min_altitude: 2.0,
            max_altitude: 20.0,
            ..Self::default()
        }
    }

    pub fn with_altitude_range(self, min_altitude: f64, max_altitude: f64) -> Self {
        Self {
            min_altitude,
            max_altitude,
            ..self
        }
    }

    pub fn with_altitude_scale(self, altitude_scale: f64) -> Self {
        Self {
            altitude_scale,
            ..self
        }
    }

    pub fn with_control_fractions(self, first: f64, second: f64) -> Self {
        Self {
            control_fractions: (first, second),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), GlobeError> {
        let (min, max) = (self.min_altitude, self.max_altitude);
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GlobeError::InvalidAltitudeRange { min, max });
        }
        if !self.altitude_scale.is_finite() || self.altitude_scale < 0.0 {
            return Err(GlobeError::InvalidAltitudeScale(self.altitude_scale));
        }
        let (first, second) = self.control_fractions;
        if !first.is_finite() || !second.is_finite() {
            return Err(GlobeError::InvalidControlFractions { first, second });
        }
        Ok(())
    }
}
