use tracing::{debug, warn};

use crate::{
    components::{
        arc::{Arc, ArcConfig},
        geo_location::GeoLocation,
        sphere::SphereModel,
    },
    error::GlobeError,
    systems::arc::ArcSystem,
};

/// The sphere and default arc tuning shared by everything drawn on one globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeSession {
    sphere: SphereModel,
    arc_config: ArcConfig,
}

impl GlobeSession {
    pub fn new(sphere: SphereModel, arc_config: ArcConfig) -> Result<Self, GlobeError> {
        if let Err(err) = sphere.validate().and_then(|_| arc_config.validate()) {
            warn!(%err, "rejected globe session config");
            return Err(err);
        }
        debug!(radius = sphere.radius, ?arc_config, "globe session created");
        Ok(Self { sphere, arc_config })
    }

    pub fn sphere(&self) -> &SphereModel {
        &self.sphere
    }

    pub fn arc_config(&self) -> &ArcConfig {
        &self.arc_config
    }

    /// Arc using the session's config.
    pub fn arc(&self, start: &GeoLocation, end: &GeoLocation) -> Arc {
        ArcSystem::build_arc(start, end, &self.sphere, &self.arc_config)
    }

    /// Arc with a one-off config; the session default is left alone.
    pub fn arc_with(&self, start: &GeoLocation, end: &GeoLocation, config: &ArcConfig) -> Arc {
        ArcSystem::build_arc(start, end, &self.sphere, config)
    }
}

impl Default for GlobeSession {
    fn default() -> Self {
        Self {
            sphere: SphereModel::default(),
            arc_config: ArcConfig::default(),
        }
    }
}
