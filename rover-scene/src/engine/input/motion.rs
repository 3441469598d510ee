use bevy::prelude::*;

use super::keys::SceneKey;
use super::state::HeldKeys;
use crate::engine::camera::rig::{CameraMode, CameraRig};
use crate::engine::scene::actor::ActorRig;
use crate::engine::scene::rotation::RotationAccumulator;
use crate::engine::scene::transform::WheelMotion;

/// Drive keys in application order. When several are held they all rotate
/// the rover; the last one held decides the wheel animation.
const DRIVE_KEYS: [(SceneKey, f32, WheelMotion); 4] = [
    (SceneKey::DriveForward, 1.0, WheelMotion::Forward),
    (SceneKey::DriveBackward, -1.0, WheelMotion::Backward),
    (SceneKey::TurnLeft, 1.0, WheelMotion::TurnLeft),
    (SceneKey::TurnRight, -1.0, WheelMotion::TurnRight),
];

/// Free-fly keys and the offset direction each one pushes.
const CAMERA_KEYS: [(SceneKey, Vec3); 6] = [
    (SceneKey::CameraRight, Vec3::X),
    (SceneKey::CameraLeft, Vec3::NEG_X),
    (SceneKey::CameraUp, Vec3::Y),
    (SceneKey::CameraDown, Vec3::NEG_Y),
    (SceneKey::CameraIn, Vec3::Z),
    (SceneKey::CameraOut, Vec3::NEG_Z),
];

/// Rotate the player's accumulator for every held drive key.
///
/// Nothing moves while `colliding`; the wheels then report `Idle`.
pub fn apply_player_motion(
    accumulator: &mut RotationAccumulator,
    rig: &ActorRig,
    held: &HeldKeys,
    colliding: bool,
    step_radians: f32,
) -> WheelMotion {
    if colliding {
        return WheelMotion::Idle;
    }

    let mut motion = WheelMotion::Idle;
    for (key, sign, key_motion) in DRIVE_KEYS {
        if !held.contains(&key) {
            continue;
        }
        let axis = match key_motion {
            WheelMotion::Forward | WheelMotion::Backward => rig.forward_axis,
            _ => rig.turn_axis,
        };
        accumulator.rotate(sign * step_radians, axis);
        motion = key_motion;
    }
    motion
}

/// Nudge the free-fly eye by `step` per held key. No effect in chase mode.
pub fn apply_camera_keys(rig: &mut CameraRig, held: &HeldKeys, step: f32) {
    if rig.mode != CameraMode::FreeFly {
        return;
    }
    for (key, direction) in CAMERA_KEYS {
        if held.contains(&key) {
            rig.free_offset += direction * step;
        }
    }
}
