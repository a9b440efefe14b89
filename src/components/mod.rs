pub mod arc;
pub mod camera;
pub mod geo_location;
pub mod mesh;
pub mod sphere;
pub mod viewport;
