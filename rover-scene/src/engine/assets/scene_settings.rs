use bevy::prelude::*;
use constants::motion::{CAMERA_STEP, HOMING_GAIN, ORBIT_STEP_DEGREES, PLAYER_STEP_DEGREES};
use constants::scene::{COLLISION_HALF_EXTENT, WHEEL_SPIN_DEGREES_PER_SECOND, WHEEL_STEER_DEGREES};
use constants::texture::{PLANET_TEXTURE, ROVER_TEXTURE, STARFIELD_TEXTURE};
use serde::{Deserialize, Serialize};

use crate::engine::scene::actors::HomingMode;
use crate::engine::scene::transform::WheelParams;

#[derive(Debug)]
pub enum SettingsError {
    Json(serde_json::Error),
    NonFinite(&'static str),
    Negative(&'static str),
    EmptyPath(&'static str),
    LoadFailed(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Json(e) => write!(f, "Settings JSON error: {}", e),
            SettingsError::NonFinite(field) => write!(f, "Setting '{}' is not finite", field),
            SettingsError::Negative(field) => write!(f, "Setting '{}' must not be negative", field),
            SettingsError::EmptyPath(field) => write!(f, "Texture path '{}' is empty", field),
            SettingsError::LoadFailed(path) => write!(f, "Failed to load settings from {}", path),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Image paths relative to the asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub planet: String,
    pub rover: String,
    pub starfield: String,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            planet: PLANET_TEXTURE.to_string(),
            rover: ROVER_TEXTURE.to_string(),
            starfield: STARFIELD_TEXTURE.to_string(),
        }
    }
}

/// Runtime tuning for the scene, read from `settings/scene.settings.json`.
/// Missing fields keep the compiled-in defaults.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath, Resource)]
#[serde(default)]
pub struct SceneSettings {
    pub player_step_degrees: f32,
    pub orbit_step_degrees: f32,
    pub homing_gain: f32,
    pub homing_mode: HomingMode,
    pub camera_step: f32,
    pub collision_half_extent: f32,
    pub wheel_spin_degrees_per_second: f32,
    pub wheel_steer_degrees: f32,
    /// How far the mouse pulls the chase camera target, in world units.
    pub chase_mouse_bias: f32,
    pub textures: TextureSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            player_step_degrees: PLAYER_STEP_DEGREES,
            orbit_step_degrees: ORBIT_STEP_DEGREES,
            homing_gain: HOMING_GAIN,
            homing_mode: HomingMode::default(),
            camera_step: CAMERA_STEP,
            collision_half_extent: COLLISION_HALF_EXTENT,
            wheel_spin_degrees_per_second: WHEEL_SPIN_DEGREES_PER_SECOND,
            wheel_steer_degrees: WHEEL_STEER_DEGREES,
            chase_mouse_bias: 0.0,
            textures: TextureSettings::default(),
        }
    }
}

impl SceneSettings {
    /// Compact JSON of the effective settings, for the startup log.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rejects values that would push NaN into the transform pipeline.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let signed = [
            ("player_step_degrees", self.player_step_degrees),
            ("orbit_step_degrees", self.orbit_step_degrees),
            ("homing_gain", self.homing_gain),
            ("wheel_spin_degrees_per_second", self.wheel_spin_degrees_per_second),
            ("wheel_steer_degrees", self.wheel_steer_degrees),
            ("chase_mouse_bias", self.chase_mouse_bias),
        ];
        for (field, value) in signed {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite(field));
            }
        }

        let unsigned = [
            ("camera_step", self.camera_step),
            ("collision_half_extent", self.collision_half_extent),
        ];
        for (field, value) in unsigned {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite(field));
            }
            if value < 0.0 {
                return Err(SettingsError::Negative(field));
            }
        }

        let paths = [
            ("textures.planet", &self.textures.planet),
            ("textures.rover", &self.textures.rover),
            ("textures.starfield", &self.textures.starfield),
        ];
        for (field, path) in paths {
            if path.trim().is_empty() {
                return Err(SettingsError::EmptyPath(field));
            }
        }

        Ok(())
    }

    pub fn player_step_radians(&self) -> f32 {
        self.player_step_degrees.to_radians()
    }

    pub fn orbit_step_radians(&self) -> f32 {
        self.orbit_step_degrees.to_radians()
    }

    pub fn wheel_params(&self) -> WheelParams {
        WheelParams {
            spin_degrees_per_second: self.wheel_spin_degrees_per_second,
            steer_degrees: self.wheel_steer_degrees,
        }
    }
}
