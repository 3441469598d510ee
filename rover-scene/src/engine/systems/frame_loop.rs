use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowFocused};

use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::core::app_state::AppState;
use crate::engine::input::keys::key_event_from_bevy;
use crate::engine::input::state::InputState;
use crate::engine::render::draw_list::DrawList;
use crate::engine::render::driver::render_frame;
use crate::engine::render::scene_entities::{apply_draw_list, spawn_scene_parts};
use crate::engine::scene::frame::advance_frame;
use crate::engine::scene::state::SceneState;

/// Scene entities on entering `Running`, then input → step → draw every frame.
pub struct SceneLoopPlugin;

impl Plugin for SceneLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .init_resource::<SceneState>()
            .init_resource::<DrawList>()
            .add_systems(OnEnter(AppState::Running), spawn_scene_parts)
            .add_systems(
                Update,
                (collect_input, advance_scene, apply_draw_list)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

// Fold this frame's window events into the input state
pub fn collect_input(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut focus_events: EventReader<WindowFocused>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<InputState>,
) {
    for event in keyboard_events.read() {
        if let Some(key_event) = key_event_from_bevy(event) {
            input.handle_key(key_event);
        }
    }

    // Releases are never delivered to an unfocused window.
    for focus in focus_events.read() {
        if !focus.focused {
            input.release_all();
        }
    }

    let Ok(window) = windows.single() else {
        return;
    };
    input.set_viewport(window.size().as_uvec2());
    // Outside the window the last known cursor position is kept.
    if let Some(cursor) = window.cursor_position() {
        input.set_cursor(cursor);
    }
}

// One scene step, handed to the render driver
pub fn advance_scene(
    mut state: ResMut<SceneState>,
    mut input: ResMut<InputState>,
    settings: Res<SceneSettings>,
    time: Res<Time>,
    mut draw_list: ResMut<DrawList>,
) {
    let snapshot = input.snapshot();
    let mode_before = state.camera.mode;

    let frame = advance_frame(&mut state, &snapshot, &settings, time.elapsed_secs());

    if state.camera.mode != mode_before {
        info!("Camera mode: {}", state.camera.mode.label());
    }

    draw_list.begin(frame.lens);
    render_frame(&frame, &mut *draw_list);
}
