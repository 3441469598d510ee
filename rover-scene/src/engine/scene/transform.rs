use bevy::prelude::*;
use constants::scene::{
    PLANET_SCALE, PLAYER_BODY_YAW_DEGREES, PROXY_ANCHOR, ROVER_SCALE, WHEEL_DIAMETER, WHEEL_INSET,
    WHEEL_WIDTH,
};

use super::actor::{ActorId, ActorRig};
use super::rotation::RotationAccumulator;

pub const WHEEL_COUNT: usize = 4;

/// Corner signs along (forward axis, turn axis) for each wheel slot.
const WHEEL_CORNERS: [(f32, f32); WHEEL_COUNT] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// How a rover moved this frame, as seen by its wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelMotion {
    #[default]
    Idle,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl WheelMotion {
    /// Sign and rotation axis of the rolling spin.
    fn spin(self, rig: &ActorRig) -> Option<(f32, Vec3)> {
        match self {
            WheelMotion::Idle => None,
            WheelMotion::Forward => Some((1.0, rig.forward_axis)),
            WheelMotion::Backward => Some((-1.0, rig.forward_axis)),
            WheelMotion::TurnLeft => Some((1.0, rig.turn_axis)),
            WheelMotion::TurnRight => Some((-1.0, rig.turn_axis)),
        }
    }

    fn steer_sign(self) -> f32 {
        match self {
            WheelMotion::TurnLeft => 1.0,
            WheelMotion::TurnRight => -1.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelParams {
    pub spin_degrees_per_second: f32,
    pub steer_degrees: f32,
}

/// Model matrices for one rover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoverPose {
    pub body: Mat4,
    pub wheels: [Mat4; WHEEL_COUNT],
}

pub fn planet_transform() -> Mat4 {
    Mat4::from_scale(Vec3::splat(PLANET_SCALE))
}

/// Scale first, then push the rover out to its offset.
pub fn base_transform(rig: &ActorRig) -> Mat4 {
    Mat4::from_translation(rig.offset) * Mat4::from_scale(Vec3::splat(ROVER_SCALE))
}

/// `planet × accumulator × base`, the frame every rover part hangs off.
pub fn actor_chain(planet: Mat4, accumulator: &RotationAccumulator, rig: &ActorRig) -> Mat4 {
    planet * accumulator.matrix() * base_transform(rig)
}

/// World-space stand-in for the actor used by collision and homing.
pub fn proxy_position(planet: Mat4, accumulator: &RotationAccumulator, rig: &ActorRig) -> Vec3 {
    actor_chain(planet, accumulator, rig).transform_point3(PROXY_ANCHOR)
}

fn body_local_transform(actor: ActorId) -> Mat4 {
    match actor {
        ActorId::Player => Mat4::from_rotation_y(PLAYER_BODY_YAW_DEGREES.to_radians()),
        ActorId::Orbiter | ActorId::Homer => Mat4::IDENTITY,
    }
}

/// Wheel hub position on the planet-facing side of the body.
pub fn wheel_corner(rig: &ActorRig, index: usize) -> Vec3 {
    let (along_forward, along_turn) = WHEEL_CORNERS[index % WHEEL_COUNT];
    -WHEEL_INSET * rig.radial()
        + WHEEL_INSET * along_forward * rig.forward_axis
        + WHEEL_INSET * along_turn * rig.turn_axis
}

/// Thin along the axle, round in the other two directions.
fn wheel_scale(rig: &ActorRig) -> Vec3 {
    Vec3::splat(WHEEL_DIAMETER) - rig.forward_axis.abs() * (WHEEL_DIAMETER - WHEEL_WIDTH)
}

/// `translate(corner) × steer × spin × scale(wheel)`.
///
/// The steer tilt wraps the spin: the wheel rolls about its own axle first,
/// then the rolled wheel is tilted about the radial axis.
///
/// Idle wheels get neither steer nor spin, so they hold still.
pub fn wheel_local_transform(
    rig: &ActorRig,
    index: usize,
    motion: WheelMotion,
    elapsed_secs: f32,
    params: &WheelParams,
) -> Mat4 {
    let spin = match motion.spin(rig) {
        Some((sign, axis)) => {
            let degrees = (elapsed_secs * params.spin_degrees_per_second) % 360.0;
            Mat4::from_axis_angle(axis, sign * degrees.to_radians())
        }
        None => Mat4::IDENTITY,
    };
    let steer_sign = motion.steer_sign();
    let steer = if steer_sign == 0.0 {
        Mat4::IDENTITY
    } else {
        Mat4::from_axis_angle(rig.radial(), steer_sign * params.steer_degrees.to_radians())
    };

    Mat4::from_translation(wheel_corner(rig, index))
        * steer
        * spin
        * Mat4::from_scale(wheel_scale(rig))
}

pub fn compose_rover(
    planet: Mat4,
    actor: ActorId,
    accumulator: &RotationAccumulator,
    motion: WheelMotion,
    elapsed_secs: f32,
    params: &WheelParams,
) -> RoverPose {
    let rig = actor.rig();
    let chain = actor_chain(planet, accumulator, &rig);
    let wheels = std::array::from_fn(|index| {
        chain * wheel_local_transform(&rig, index, motion, elapsed_secs, params)
    });

    RoverPose {
        body: chain * body_local_transform(actor),
        wheels,
    }
}
