//! Mesh generation for the planet, rover parts and the starfield backdrop.
//!
//! Geometry is built as plain vertex arrays first and only turned into a
//! Bevy `Mesh` at upload time.

/// Parametric sphere, textured cube and starfield quad.
///
/// Each generator returns `MeshData`; `MeshData::upload` converts it for the renderer.
pub mod scene_meshes;
