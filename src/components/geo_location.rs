/// A position on (or above) the globe.
///
/// `altitude` is not a physical height. It is a unitless offset added to the
/// sphere's base radius, so `altitude = 1.0` on a sphere of radius `6.371`
/// lands at distance `7.371` from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Degrees, `[-180, 180]`.
    pub longitude: f64,
    pub altitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    pub fn with_altitude(self, altitude: f64) -> Self {
        Self { altitude, ..self }
    }

    /// Latitude and longitude both inside their documented bounds.
    /// Out-of-range values still project to finite points, this is only
    /// a convenience for callers that want to reject them up front.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
