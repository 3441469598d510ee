//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loading, scene entities and the frame loop.
pub mod app_setup;

/// Application state machine and the loading to running transition.
pub mod app_state;

/// Fixed-size, vsync window matching the scene's square viewport.
pub mod window_config;
