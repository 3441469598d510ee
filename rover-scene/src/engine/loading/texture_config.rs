use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::engine::assets::scene_textures::SceneTextures;
use crate::engine::loading::progress::LoadingProgress;

/// Repeat addressing with linear filtering, so sphere seams and cube UVs wrap.
pub fn scene_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        ..default()
    })
}

// Configure texture sampling once every texture has resolved
pub fn configure_loaded_textures(
    mut loading_progress: ResMut<LoadingProgress>,
    textures: Option<Res<SceneTextures>>,
    mut images: ResMut<Assets<Image>>,
) {
    if loading_progress.textures_configured || !loading_progress.textures_resolved {
        return;
    }
    let Some(textures) = textures else {
        return;
    };

    let sampler = scene_sampler();
    for (_, handle) in textures.entries() {
        // Failed loads have no image to configure.
        if let Some(image) = images.get_mut(handle) {
            image.sampler = sampler.clone();
        }
    }

    println!("✓ Texture sampling configured");
    loading_progress.textures_configured = true;
}
