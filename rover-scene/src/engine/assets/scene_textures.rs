use bevy::prelude::*;

use crate::engine::assets::scene_settings::TextureSettings;
use crate::engine::render::driver::TextureKind;

/// Image handles for every textured part of the scene.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneTextures {
    pub planet: Handle<Image>,
    pub rover: Handle<Image>,
    pub starfield: Handle<Image>,
}

impl SceneTextures {
    pub fn load(asset_server: &AssetServer, paths: &TextureSettings) -> Self {
        Self {
            planet: asset_server.load(paths.planet.clone()),
            rover: asset_server.load(paths.rover.clone()),
            starfield: asset_server.load(paths.starfield.clone()),
        }
    }

    pub fn entries(&self) -> [(TextureKind, &Handle<Image>); 3] {
        [
            (TextureKind::Planet, &self.planet),
            (TextureKind::Rover, &self.rover),
            (TextureKind::Starfield, &self.starfield),
        ]
    }
}

impl TextureKind {
    pub fn label(self) -> &'static str {
        match self {
            TextureKind::Planet => "Planet texture",
            TextureKind::Rover => "Rover texture",
            TextureKind::Starfield => "Starfield texture",
        }
    }
}
