//! Geographic projection and great-circle arcs for a 3D globe.
//!
//! Locations are projected onto a sphere centred at the origin with the
//! north pole on `+y`. Arcs between two locations are cubic Bézier curves
//! whose interior control points sit on the great circle between the ends,
//! lifted above the surface in proportion to the chord length.
//!
//! ```
//! use globe_arcs::{ArcConfig, ArcSystem, GeoLocation, SphereModel};
//!
//! let london = GeoLocation::new(51.5074, 0.1278);
//! let madrid = GeoLocation::new(40.4378, -3.8196);
//! let arc = ArcSystem::build_arc(&london, &madrid, &SphereModel::default(), &ArcConfig::default());
//! assert_eq!(arc.sample(50).len(), 51);
//! ```

pub mod components;
pub mod error;
pub mod logging;
pub mod session;
pub mod systems;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use components::{
    arc::{Arc, ArcConfig, Point3D},
    camera::{Camera, CameraUniform},
    geo_location::GeoLocation,
    mesh::Vertex,
    sphere::{SphereModel, EARTH_RADIUS},
    viewport::{Viewport, ViewportEvent},
};
pub use error::GlobeError;
pub use session::GlobeSession;
pub use systems::{
    arc::{clamp, ArcSystem},
    camera::CameraSystem,
    geospatial::{coordinates::CoordinatesSystem, great_circle::GreatCircleSystem},
    mesh::MeshSystem,
    window::WindowSystem,
};
