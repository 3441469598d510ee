use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::{FpsText, HudText};
use crate::engine::scene::state::SceneState;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn hud_line(state: &SceneState) -> String {
    let collision = if state.collision { "yes" } else { "no" };
    format!("Camera: {} | Collision: {}", state.camera.mode.label(), collision)
}

pub fn hud_text_update_system(
    state: Res<SceneState>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    if !state.is_changed() {
        return;
    }
    let line = hud_line(&state);
    for mut text in &mut query {
        text.0.clone_from(&line);
    }
}
