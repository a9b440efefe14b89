use tracing::debug;

use crate::components::{
    arc::Arc, geo_location::GeoLocation, mesh::Vertex, sphere::SphereModel,
};

use super::geospatial::coordinates::CoordinatesSystem;

pub struct MeshSystem {}

impl MeshSystem {
    fn map(value: u32, start1: u32, stop1: u32, start2: f64, stop2: f64) -> f64 {
        start2
            + (stop2 - start2) * ((value as f64 - start1 as f64) / (stop1 as f64 - start1 as f64))
    }

    fn create_vertex(lat: f64, lon: f64, sphere: &SphereModel, tex_coords: [f32; 2]) -> Vertex {
        let p = CoordinatesSystem::project(&GeoLocation::new(lat, lon), sphere);
        Vertex::new([p.x as f32, p.y as f32, p.z as f32], tex_coords)
    }

    /// Latitude/longitude grid over the globe, `(segments + 1)^2` vertices and
    /// a triangle list. Vertices go through the same projection as arcs so the
    /// two line up. `segments` below 2 is raised to 2.
    pub fn generate_sphere_mesh(sphere: &SphereModel, segments: u32) -> (Vec<Vertex>, Vec<u32>) {
        let total = segments.max(2);
        let row = total + 1;
        let mut vertices = Vec::with_capacity((row * row) as usize);
        let mut indices = Vec::with_capacity((total * total * 6) as usize);

        // Rows run north to south, columns west to east.
        for i in 0..=total {
            let lat = MeshSystem::map(i, 0, total, 90.0, -90.0);
            for j in 0..=total {
                let lon = MeshSystem::map(j, 0, total, -180.0, 180.0);
                let uv = [j as f32 / total as f32, i as f32 / total as f32];
                vertices.push(MeshSystem::create_vertex(lat, lon, sphere, uv));
            }
        }

        for i in 0..total {
            for j in 0..total {
                let a = i * row + j;
                let b = a + row;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        debug!(
            segments = total,
            vertices = vertices.len(),
            indices = indices.len(),
            "generated sphere mesh"
        );
        (vertices, indices)
    }

    /// The arc sampled at `segments` uniform steps, as a line strip.
    pub fn arc_polyline(arc: &Arc, segments: usize) -> Vec<Vertex> {
        let steps = segments.max(1);
        arc.sample(steps)
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                Vertex::new(
                    [p.x as f32, p.y as f32, p.z as f32],
                    [i as f32 / steps as f32, 0.0],
                )
            })
            .collect()
    }
}
