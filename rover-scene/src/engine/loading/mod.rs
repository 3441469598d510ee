//! Startup loading: settings first, then the textures they name.
//!
//! The app stays in the loading state until the settings have resolved and
//! every texture has either loaded or failed.

/// Loading progress tracking resource for state transitions.
///
/// Records per-texture status so each outcome is logged exactly once.
pub mod progress;

/// Scene settings loading, validation and fallback to defaults.
///
/// Starts the texture loads once settings are known.
pub mod settings_loader;

/// Sampler configuration for the loaded scene textures.
pub mod texture_config;

/// Texture load state monitoring for planet, rover and starfield images.
pub mod texture_loader;
