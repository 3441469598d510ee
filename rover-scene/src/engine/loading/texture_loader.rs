use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_textures::SceneTextures;
use crate::engine::loading::progress::{LoadingProgress, TextureStatus};

pub fn texture_status(state: Option<LoadState>) -> TextureStatus {
    match state {
        Some(LoadState::Loaded) => TextureStatus::Loaded,
        Some(LoadState::Failed(_)) => TextureStatus::Failed,
        _ => TextureStatus::Pending,
    }
}

// Track each texture until it has either loaded or failed
pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    textures: Option<Res<SceneTextures>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.textures_resolved || !loading_progress.settings_loaded {
        return;
    }
    let Some(textures) = textures else {
        return;
    };

    let entries = textures.entries();
    for (kind, handle) in entries {
        let status = texture_status(asset_server.get_load_state(handle));
        if !loading_progress.update_texture(kind, status) {
            continue;
        }
        let path = handle
            .path()
            .map(|path| path.to_string())
            .unwrap_or_default();
        match status {
            TextureStatus::Loaded => println!("✓ {} loaded ({})", kind.label(), path),
            TextureStatus::Failed => warn!("Failed to load {} ({})", kind.label(), path),
            TextureStatus::Pending => {}
        }
    }

    if loading_progress.all_textures_resolved(entries.len()) {
        let failed = loading_progress.failed_textures();
        if failed > 0 {
            warn!("{} texture(s) failed to load; affected parts use a flat fallback colour", failed);
        } else {
            println!("✓ All scene textures loaded successfully");
        }
        loading_progress.textures_resolved = true;
    }
}
