use std::collections::HashSet;

use bevy::prelude::*;

use super::keys::{KeyAction, KeyEvent, SceneKey, ToggleLatch};

pub type HeldKeys = HashSet<SceneKey>;

/// Latest keyboard and mouse state, written by the input collector system.
#[derive(Resource, Debug, Default)]
pub struct InputState {
    held: HeldKeys,
    camera_toggle: ToggleLatch,
    cursor: Vec2,
    viewport: UVec2,
}

impl InputState {
    pub fn handle_key(&mut self, event: KeyEvent) {
        match event.action {
            KeyAction::Press | KeyAction::Repeat => {
                self.held.insert(event.key);
            }
            KeyAction::Release => {
                self.held.remove(&event.key);
            }
        }
        if event.key == SceneKey::ToggleCamera {
            self.camera_toggle.observe(event.action);
        }
    }

    /// Cursor in window pixels, origin top-left.
    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    pub fn set_viewport(&mut self, viewport: UVec2) {
        self.viewport = viewport;
    }

    /// Drop every held key, e.g. when the window loses focus and releases
    /// will never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Freeze this frame's input. Drains pending camera toggles.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            held: self.held.clone(),
            camera_toggles: self.camera_toggle.take(),
            mouse: normalize_mouse(self.cursor, self.viewport),
            viewport: self.viewport,
        }
    }
}

/// Input as seen by one frame step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub held: HeldKeys,
    pub camera_toggles: u32,
    /// Cursor in [-1, 1]², y up.
    pub mouse: Vec2,
    pub viewport: UVec2,
}

#[cfg(test)]
impl InputSnapshot {
    pub fn with_held(keys: impl IntoIterator<Item = SceneKey>) -> Self {
        Self {
            held: keys.into_iter().collect(),
            ..default()
        }
    }
}

/// Window pixels (origin top-left) to [-1, 1]² with y pointing up.
/// An empty viewport maps to the centre.
pub fn normalize_mouse(cursor: Vec2, viewport: UVec2) -> Vec2 {
    if viewport.x == 0 || viewport.y == 0 {
        return Vec2::ZERO;
    }
    let unit = cursor / viewport.as_vec2();
    Vec2::new(unit.x * 2.0 - 1.0, (1.0 - unit.y) * 2.0 - 1.0).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: SceneKey) -> KeyEvent {
        KeyEvent::new(key, KeyAction::Press)
    }

    fn release(key: SceneKey) -> KeyEvent {
        KeyEvent::new(key, KeyAction::Release)
    }

    #[test]
    fn several_keys_can_be_held_at_once() {
        let mut input = InputState::default();
        input.handle_key(press(SceneKey::DriveForward));
        input.handle_key(press(SceneKey::TurnLeft));
        input.handle_key(KeyEvent::new(SceneKey::DriveForward, KeyAction::Repeat));

        let snapshot = input.snapshot();
        assert!(snapshot.held.contains(&SceneKey::DriveForward));
        assert!(snapshot.held.contains(&SceneKey::TurnLeft));

        input.handle_key(release(SceneKey::DriveForward));
        let snapshot = input.snapshot();
        assert!(!snapshot.held.contains(&SceneKey::DriveForward));
        assert!(snapshot.held.contains(&SceneKey::TurnLeft));
    }

    #[test]
    fn camera_toggle_is_reported_once() {
        let mut input = InputState::default();
        input.handle_key(press(SceneKey::ToggleCamera));
        input.handle_key(KeyEvent::new(SceneKey::ToggleCamera, KeyAction::Repeat));
        assert_eq!(input.snapshot().camera_toggles, 0);

        input.handle_key(release(SceneKey::ToggleCamera));
        assert_eq!(input.snapshot().camera_toggles, 1);
        assert_eq!(input.snapshot().camera_toggles, 0);
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = InputState::default();
        input.handle_key(press(SceneKey::CameraUp));
        input.release_all();
        assert!(input.snapshot().held.is_empty());
    }

    #[test]
    fn mouse_corners_map_to_unit_square() {
        let viewport = UVec2::new(960, 960);
        assert_eq!(normalize_mouse(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_mouse(Vec2::new(960.0, 960.0), viewport), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_mouse(Vec2::new(480.0, 480.0), viewport), Vec2::ZERO);
    }

    #[test]
    fn mouse_outside_the_window_is_clamped() {
        let mouse = normalize_mouse(Vec2::new(-400.0, 2000.0), UVec2::new(800, 600));
        assert_eq!(mouse, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn empty_viewport_maps_to_centre() {
        assert_eq!(normalize_mouse(Vec2::new(10.0, 10.0), UVec2::ZERO), Vec2::ZERO);
    }
}
