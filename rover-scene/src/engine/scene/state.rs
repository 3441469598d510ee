use bevy::prelude::*;

use super::actor::{ACTOR_COUNT, ActorId};
use super::rotation::RotationAccumulator;
use super::transform::{WheelMotion, planet_transform, proxy_position};
use crate::engine::camera::rig::CameraRig;

/// Everything the frame step mutates. Created once when the scene starts
/// running and owned by the app until exit.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneState {
    accumulators: [RotationAccumulator; ACTOR_COUNT],
    wheel_motion: [WheelMotion; ACTOR_COUNT],
    pub camera: CameraRig,
    /// Last frame's collision result. Read before motion, written after.
    pub collision: bool,
    proxies: [Vec3; ACTOR_COUNT],
}

impl Default for SceneState {
    fn default() -> Self {
        let accumulators = [RotationAccumulator::IDENTITY; ACTOR_COUNT];
        let planet = planet_transform();
        let proxies = ActorId::ALL.map(|actor| {
            proxy_position(planet, &accumulators[actor.index()], &actor.rig())
        });

        Self {
            accumulators,
            wheel_motion: [WheelMotion::Idle; ACTOR_COUNT],
            camera: CameraRig::default(),
            collision: false,
            proxies,
        }
    }
}

impl SceneState {
    pub fn accumulator(&self, actor: ActorId) -> &RotationAccumulator {
        &self.accumulators[actor.index()]
    }

    pub fn accumulator_mut(&mut self, actor: ActorId) -> &mut RotationAccumulator {
        &mut self.accumulators[actor.index()]
    }

    pub fn wheel_motion(&self, actor: ActorId) -> WheelMotion {
        self.wheel_motion[actor.index()]
    }

    pub fn set_wheel_motion(&mut self, actor: ActorId, motion: WheelMotion) {
        self.wheel_motion[actor.index()] = motion;
    }

    pub fn proxy(&self, actor: ActorId) -> Vec3 {
        self.proxies[actor.index()]
    }

    pub fn proxies(&self) -> &[Vec3; ACTOR_COUNT] {
        &self.proxies
    }

    /// Recompute every proxy from the current accumulators.
    pub fn refresh_proxies(&mut self, planet: Mat4) {
        for actor in ActorId::ALL {
            self.proxies[actor.index()] =
                proxy_position(planet, &self.accumulators[actor.index()], &actor.rig());
        }
    }

    /// Refresh a single proxy, used when a later controller needs an
    /// earlier actor's fresh position within the same frame.
    pub fn refresh_proxy(&mut self, planet: Mat4, actor: ActorId) {
        self.proxies[actor.index()] =
            proxy_position(planet, &self.accumulators[actor.index()], &actor.rig());
    }
}
