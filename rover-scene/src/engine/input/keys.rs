use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    DriveForward,
    DriveBackward,
    TurnLeft,
    TurnRight,
    CameraRight,
    CameraLeft,
    CameraIn,
    CameraOut,
    CameraUp,
    CameraDown,
    ToggleCamera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: SceneKey,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn new(key: SceneKey, action: KeyAction) -> Self {
        Self { key, action }
    }
}

pub fn key_binding(code: KeyCode) -> Option<SceneKey> {
    match code {
        KeyCode::KeyW => Some(SceneKey::DriveForward),
        KeyCode::KeyS => Some(SceneKey::DriveBackward),
        KeyCode::KeyA => Some(SceneKey::TurnLeft),
        KeyCode::KeyD => Some(SceneKey::TurnRight),
        KeyCode::ArrowRight => Some(SceneKey::CameraRight),
        KeyCode::ArrowLeft => Some(SceneKey::CameraLeft),
        KeyCode::ArrowUp => Some(SceneKey::CameraIn),
        KeyCode::ArrowDown => Some(SceneKey::CameraOut),
        KeyCode::KeyR => Some(SceneKey::CameraUp),
        KeyCode::KeyF => Some(SceneKey::CameraDown),
        KeyCode::KeyC => Some(SceneKey::ToggleCamera),
        _ => None,
    }
}

/// Translate a Bevy keyboard event; unbound keys yield `None`.
pub fn key_event_from_bevy(event: &KeyboardInput) -> Option<KeyEvent> {
    let key = key_binding(event.key_code)?;
    let action = match (event.state, event.repeat) {
        (ButtonState::Released, _) => KeyAction::Release,
        (ButtonState::Pressed, true) => KeyAction::Repeat,
        (ButtonState::Pressed, false) => KeyAction::Press,
    };
    Some(KeyEvent::new(key, action))
}

/// Edge detector for the camera toggle: one flip per press, taken on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleLatch {
    armed: bool,
    pending: u32,
}

impl ToggleLatch {
    pub fn observe(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press => self.armed = true,
            // Repeats only arrive while held, so they never re-arm.
            KeyAction::Repeat => {}
            KeyAction::Release => {
                if self.armed {
                    self.armed = false;
                    self.pending += 1;
                }
            }
        }
    }

    /// Flips completed since the last call.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}
