/// Default texture paths, relative to the asset root.
pub const PLANET_TEXTURE: &str = "textures/texture.jpg";
pub const ROVER_TEXTURE: &str = "textures/rover2.jpg";
pub const STARFIELD_TEXTURE: &str = "textures/starryskylarge2.jpg";

/// Runtime scene settings overriding the compile-time defaults.
pub const SCENE_SETTINGS_PATH: &str = "settings/scene.settings.json";
