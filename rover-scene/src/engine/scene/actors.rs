use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::actor::ActorRig;
use super::rotation::RotationAccumulator;
use super::transform::WheelMotion;

/// Axis for the bearing measured in the YZ plane.
const FIRST_BEARING_AXIS: Vec3 = Vec3::X;
/// Axis for the bearing measured in the ZX plane.
const SECOND_BEARING_AXIS: Vec3 = Vec3::Y;

/// How the homing rover combines its two bearing corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomingMode {
    /// First bearing about X, then the second about Y. When the first is
    /// zero only the second is applied. Order dependent.
    #[default]
    Sequential,
    /// One rotation about the normalized sum of both corrections.
    Combined,
}

/// Constant-speed orbit about the rover's forward axis. Frozen while colliding.
pub fn advance_orbiter(
    accumulator: &mut RotationAccumulator,
    rig: &ActorRig,
    step_radians: f32,
    colliding: bool,
) -> WheelMotion {
    if colliding || step_radians == 0.0 {
        return WheelMotion::Idle;
    }
    accumulator.rotate(step_radians, rig.forward_axis);
    WheelMotion::Forward
}

/// `(atan2(z, y), atan2(x, z))` of the target. Non-finite results clamp to 0.
pub fn bearing_angles(target: Vec3) -> (f32, f32) {
    let finite_or_zero = |angle: f32| if angle.is_finite() { angle } else { 0.0 };
    (
        finite_or_zero(target.z.atan2(target.y)),
        finite_or_zero(target.x.atan2(target.z)),
    )
}

/// Steers toward `player_position` by a small gain on both bearings.
/// Frozen while colliding.
pub fn advance_homer(
    accumulator: &mut RotationAccumulator,
    player_position: Vec3,
    gain: f32,
    mode: HomingMode,
    colliding: bool,
) -> WheelMotion {
    if colliding {
        return WheelMotion::Idle;
    }

    let (first_bearing, second_bearing) = bearing_angles(player_position);
    let first = first_bearing * gain;
    let second = second_bearing * gain;

    match mode {
        HomingMode::Sequential => {
            if first != 0.0 {
                accumulator.rotate(first, FIRST_BEARING_AXIS);
                accumulator.rotate(second, SECOND_BEARING_AXIS);
            } else if second != 0.0 {
                accumulator.rotate(second, SECOND_BEARING_AXIS);
            } else {
                return WheelMotion::Idle;
            }
        }
        HomingMode::Combined => {
            let correction = FIRST_BEARING_AXIS * first + SECOND_BEARING_AXIS * second;
            let angle = correction.length();
            if angle == 0.0 || !angle.is_finite() {
                return WheelMotion::Idle;
            }
            accumulator.rotate(angle, correction / angle);
        }
    }

    WheelMotion::Forward
}
