//! Asset types loaded at startup.
//!
//! Scene tuning arrives as a JSON asset; textures are plain images whose
//! handles are grouped so the render side can look them up by kind.

/// Runtime scene tuning and its validation errors.
pub mod scene_settings;

/// Image handles for the planet, rover and starfield textures.
pub mod scene_textures;
