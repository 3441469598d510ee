//! Render driver: turns a finished scene frame into draw calls and applies
//! them to Bevy entities.

/// Bevy entity transforms and camera updated from the draw list.
///
/// Also spawns the part entities with their meshes and unlit, alpha-masked materials.
pub mod scene_entities;

/// Per-frame draw call buffer stored as a resource.
pub mod draw_list;

/// Part, mesh and texture identities, `DrawCall`, `RenderSink` and `render_frame`.
pub mod driver;
