use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::texture::SCENE_SETTINGS_PATH;

use crate::engine::assets::scene_settings::{SceneSettings, SettingsError};
use crate::engine::assets::scene_textures::SceneTextures;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<SceneSettings>>,
}

// Kick off the settings load
pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    settings_loader.handle = Some(asset_server.load(SCENE_SETTINGS_PATH));
}

/// Validated settings, or the compiled-in defaults with the reason logged.
pub fn settings_or_default(loaded: Result<&SceneSettings, SettingsError>) -> SceneSettings {
    match loaded.and_then(|settings| settings.validate().map(|()| settings)) {
        Ok(settings) => settings.clone(),
        Err(err) => {
            warn!("{}; using default scene settings", err);
            SceneSettings::default()
        }
    }
}

// Insert settings once resolved, then start the texture loads they name
pub fn load_settings_system(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<SceneSettings>>,
) {
    if loading_progress.settings_loaded {
        return;
    }
    let Some(handle) = settings_loader.handle.as_ref() else {
        return;
    };

    let loaded = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => settings_assets
            .get(handle)
            .ok_or_else(|| SettingsError::LoadFailed(SCENE_SETTINGS_PATH.to_string())),
        Some(LoadState::Failed(err)) => {
            warn!("Settings asset failed: {}", err);
            Err(SettingsError::LoadFailed(SCENE_SETTINGS_PATH.to_string()))
        }
        _ => return,
    };

    let settings = settings_or_default(loaded);
    println!("✓ Scene settings ready ({:?} homing)", settings.homing_mode);
    match settings.to_json() {
        Ok(json) => info!("Scene settings: {}", json),
        Err(err) => warn!("{}", err),
    }

    let textures = SceneTextures::load(&asset_server, &settings.textures);
    commands.insert_resource(textures);
    commands.insert_resource(settings);
    loading_progress.settings_loaded = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_settings_pass_through() {
        let settings = SceneSettings {
            orbit_step_degrees: 1.0,
            ..default()
        };
        assert_eq!(settings_or_default(Ok(&settings)), settings);
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let settings = SceneSettings {
            camera_step: -1.0,
            ..default()
        };
        assert_eq!(settings_or_default(Ok(&settings)), SceneSettings::default());
    }

    #[test]
    fn load_failure_falls_back_to_defaults() {
        let failed = Err(SettingsError::LoadFailed(SCENE_SETTINGS_PATH.to_string()));
        assert_eq!(settings_or_default(failed), SceneSettings::default());
    }
}
