pub mod arc;
pub mod camera;
pub mod geospatial;
pub mod mesh;
pub mod window;
