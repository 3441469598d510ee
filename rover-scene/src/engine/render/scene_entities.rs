use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use constants::render_settings::{ALPHA_CUTOFF, SPHERE_SLICES, SPHERE_STACKS};

use super::draw_list::DrawList;
use super::driver::{MeshKind, PartId, TextureKind};
use crate::engine::assets::scene_textures::SceneTextures;
use crate::engine::camera::rig::Lens;
use crate::engine::loading::progress::{LoadingProgress, TextureStatus};
use crate::engine::mesh::scene_meshes::{parametric_sphere, starfield_quad, textured_cube};

/// Marks the camera driven by the scene's view matrix.
#[derive(Component)]
pub struct SceneCamera;

fn upload_meshes(meshes: &mut Assets<Mesh>) -> HashMap<MeshKind, Handle<Mesh>> {
    HashMap::from([
        (
            MeshKind::Sphere,
            meshes.add(parametric_sphere(SPHERE_SLICES, SPHERE_STACKS).upload()),
        ),
        (MeshKind::Cube, meshes.add(textured_cube().upload())),
        (MeshKind::StarfieldQuad, meshes.add(starfield_quad().upload())),
    ])
}

/// Flat colour for a part whose image failed to load.
fn fallback_colour(kind: TextureKind) -> Color {
    match kind {
        TextureKind::Planet => Color::srgb(0.72, 0.36, 0.2),
        TextureKind::Rover => Color::srgb(0.8, 0.8, 0.8),
        TextureKind::Starfield => Color::srgb(0.02, 0.02, 0.08),
    }
}

/// Unlit, double sided, texels under the alpha cutoff are discarded.
///
/// A failed image is left off the material entirely; a handle that never
/// resolves would keep the material from ever being prepared.
fn scene_material(
    kind: TextureKind,
    status: Option<TextureStatus>,
    image: &Handle<Image>,
) -> StandardMaterial {
    let (base_color, base_color_texture) = match status {
        Some(TextureStatus::Failed) => (fallback_colour(kind), None),
        _ => (Color::WHITE, Some(image.clone())),
    };
    StandardMaterial {
        base_color,
        base_color_texture,
        unlit: true,
        cull_mode: None,
        alpha_mode: AlphaMode::Mask(ALPHA_CUTOFF),
        ..default()
    }
}

fn create_materials(
    materials: &mut Assets<StandardMaterial>,
    textures: &SceneTextures,
    progress: &LoadingProgress,
) -> HashMap<TextureKind, Handle<StandardMaterial>> {
    textures
        .entries()
        .into_iter()
        .map(|(kind, image)| {
            let material = materials.add(scene_material(kind, progress.status(kind), image));
            (kind, material)
        })
        .collect()
}

/// Spawn one entity per scene part plus the camera. Runs once on entering
/// the running state.
pub fn spawn_scene_parts(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<SceneTextures>,
    loading_progress: Res<LoadingProgress>,
) {
    let mesh_handles = upload_meshes(&mut meshes);
    let material_handles = create_materials(&mut materials, &textures, &loading_progress);

    let mut spawned = 0;
    for part in PartId::all() {
        let (Some(mesh), Some(material)) = (
            mesh_handles.get(&part.mesh()),
            material_handles.get(&part.texture()),
        ) else {
            warn!("No mesh or material for {:?}", part);
            continue;
        };
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::default(),
            part,
        ));
        spawned += 1;
    }

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective(Lens::default())),
        Transform::default(),
        SceneCamera,
    ));

    info!("Spawned {} scene parts", spawned);
}

/// Bevy's perspective is infinite reverse-Z: `far` only bounds frustum
/// culling here. The finite far plane lives in `Lens::projection`, which
/// is what the draw calls carry.
fn perspective(lens: Lens) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: lens.fov_y_radians,
        aspect_ratio: lens.aspect_ratio,
        near: lens.near,
        far: lens.far,
    }
}

/// Copy this frame's draw calls onto the part entities and the camera.
pub fn apply_draw_list(
    draw_list: Res<DrawList>,
    mut parts: Query<(&PartId, &mut Transform), Without<SceneCamera>>,
    mut camera: Query<(&mut Transform, &mut Projection), With<SceneCamera>>,
) {
    for (part, mut transform) in &mut parts {
        if let Some(call) = draw_list.find(*part) {
            *transform = Transform::from_matrix(call.model);
        }
    }

    let Some(view) = draw_list.camera() else {
        return;
    };
    for (mut transform, mut projection) in &mut camera {
        // Bevy places cameras by their world transform, the inverse of the view.
        *transform = Transform::from_matrix(view.inverse());
        *projection = Projection::Perspective(perspective(draw_list.lens()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_image_falls_back_to_a_flat_colour() {
        let image = Handle::<Image>::default();
        for kind in [TextureKind::Planet, TextureKind::Rover, TextureKind::Starfield] {
            let material = scene_material(kind, Some(TextureStatus::Failed), &image);
            assert!(material.base_color_texture.is_none());
            assert_eq!(material.base_color, fallback_colour(kind));
            assert_ne!(material.base_color, Color::BLACK);
        }
    }

    #[test]
    fn loaded_image_is_sampled_untinted() {
        let image = Handle::<Image>::default();
        let material = scene_material(TextureKind::Rover, Some(TextureStatus::Loaded), &image);
        assert_eq!(material.base_color_texture, Some(image));
        assert_eq!(material.base_color, Color::WHITE);
        assert!(material.unlit);
        assert_eq!(material.alpha_mode, AlphaMode::Mask(ALPHA_CUTOFF));
    }

    #[test]
    fn unresolved_image_keeps_its_handle() {
        let image = Handle::<Image>::default();
        for status in [None, Some(TextureStatus::Pending)] {
            let material = scene_material(TextureKind::Planet, status, &image);
            assert_eq!(material.base_color_texture, Some(image.clone()));
        }
    }

    #[test]
    fn fallback_colours_tell_parts_apart() {
        let planet = fallback_colour(TextureKind::Planet);
        assert_ne!(planet, fallback_colour(TextureKind::Rover));
        assert_ne!(planet, fallback_colour(TextureKind::Starfield));
    }

    #[test]
    fn render_projection_keeps_the_lens() {
        let lens = Lens::for_viewport(UVec2::new(1920, 960));
        let projection = perspective(lens);
        assert_eq!(projection.fov, lens.fov_y_radians);
        assert_eq!(projection.aspect_ratio, 2.0);
        assert_eq!(projection.near, lens.near);
        assert_eq!(projection.far, lens.far);
    }
}
