use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};
use constants::scene::STARFIELD_CORNERS;
use std::f32::consts::{PI, TAU};

/// CPU-side triangle list, kept separate from `Mesh` so it can be inspected in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Hand the data to Bevy.
    pub fn upload(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
        .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Unit sphere swept from a half circle: `stacks` rings from pole to pole,
/// `slices` segments around. The seam column is duplicated so UVs wrap cleanly.
pub fn parametric_sphere(slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let ring = slices + 1;
    let mut data = MeshData::default();

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * PI;
        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * TAU;
            let point = [phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()];
            data.positions.push(point);
            data.normals.push(point);
            data.uvs.push([u, v]);
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring + slice;
            let b = a + ring;
            data.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    data
}

/// Faces as (normal, u tangent, v tangent).
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::NEG_Z, Vec3::X, Vec3::Y),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::X, Vec3::Z, Vec3::Y),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Y, Vec3::X, Vec3::Z),
];

/// Unit cube centred on the origin, four vertices per face. Every face
/// samples the centre of the texture, UVs in [0.25, 0.75].
pub fn textured_cube() -> MeshData {
    const UV_LOW: f32 = 0.25;
    const UV_HIGH: f32 = 0.75;
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let mut data = MeshData::default();

    for (normal, tangent_u, tangent_v) in CUBE_FACES {
        let base = data.positions.len() as u32;
        for (su, sv) in corners {
            let position = (normal + tangent_u * su + tangent_v * sv) * 0.5;
            data.positions.push(position.to_array());
            data.normals.push(normal.to_array());
            data.uvs.push([
                if su < 0.0 { UV_LOW } else { UV_HIGH },
                if sv < 0.0 { UV_LOW } else { UV_HIGH },
            ]);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    data
}

/// World-space backdrop behind the planet.
pub fn starfield_quad() -> MeshData {
    MeshData {
        positions: STARFIELD_CORNERS.to_vec(),
        normals: vec![[0.0, 0.0, -1.0]; 4],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(data: &MeshData) {
        let count = data.positions.len() as u32;
        assert!(data.indices.iter().all(|&index| index < count));
        assert_eq!(data.indices.len() % 3, 0);
    }

    #[test]
    fn sphere_vertices_lie_on_the_unit_sphere() {
        let sphere = parametric_sphere(16, 8);
        assert_eq!(sphere.positions.len(), 17 * 9);
        assert_eq!(sphere.indices.len() / 3, 16 * 8 * 2);
        for position in &sphere.positions {
            assert!((Vec3::from_array(*position).length() - 1.0).abs() < 1e-5);
        }
        assert_indices_in_range(&sphere);
    }

    #[test]
    fn sphere_uvs_cover_the_whole_texture() {
        let sphere = parametric_sphere(8, 4);
        assert_eq!(sphere.uvs.first(), Some(&[0.0, 0.0]));
        assert_eq!(sphere.uvs.last(), Some(&[1.0, 1.0]));
    }

    #[test]
    fn degenerate_tessellation_is_clamped() {
        let sphere = parametric_sphere(0, 0);
        assert_eq!(sphere.positions.len(), 4 * 3);
        assert_indices_in_range(&sphere);
    }

    #[test]
    fn cube_spans_the_unit_box() {
        let cube = textured_cube();
        assert_eq!(cube.positions.len(), 24);
        assert_eq!(cube.indices.len() / 3, 12);
        for position in &cube.positions {
            assert!(position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
        }
        for uv in &cube.uvs {
            assert!(uv.iter().all(|&c| c == 0.25 || c == 0.75));
        }
        assert_indices_in_range(&cube);
    }

    #[test]
    fn cube_vertices_lie_on_their_face() {
        let cube = textured_cube();
        for (position, normal) in cube.positions.iter().zip(&cube.normals) {
            let along_normal = Vec3::from_array(*position).dot(Vec3::from_array(*normal));
            assert!((along_normal - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn starfield_is_a_flat_rectangle() {
        let quad = starfield_quad();
        assert!(quad.positions.iter().all(|p| p[2] == 1.9));
        let xs: Vec<f32> = quad.positions.iter().map(|p| p[0]).collect();
        let ys: Vec<f32> = quad.positions.iter().map(|p| p[1]).collect();
        assert_eq!(xs, vec![-3.0, 3.0, 3.0, -3.0]);
        assert_eq!(ys, vec![-3.0, -3.0, 3.0, 3.0]);
        assert_indices_in_range(&quad);
    }
}
