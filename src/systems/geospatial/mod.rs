pub mod coordinates;
pub mod great_circle;
