use thiserror::Error;

/// Rejected configuration. The geometry itself never fails.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GlobeError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("arc altitude range [{min}, {max}] is empty or not finite")]
    InvalidAltitudeRange { min: f64, max: f64 },
    #[error("arc altitude scale must be finite and non-negative, got {0}")]
    InvalidAltitudeScale(f64),
    #[error("arc control fractions ({first}, {second}) must be finite")]
    InvalidControlFractions { first: f64, second: f64 },
}
