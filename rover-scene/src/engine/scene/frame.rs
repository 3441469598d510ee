use bevy::prelude::*;

use super::actor::{ACTOR_COUNT, ActorId};
use super::actors::{advance_homer, advance_orbiter};
use super::collision::detect_collision;
use super::state::SceneState;
use super::transform::{RoverPose, actor_chain, compose_rover, planet_transform};
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::rig::Lens;
use crate::engine::input::motion::{apply_camera_keys, apply_player_motion};
use crate::engine::input::state::InputSnapshot;

/// Everything the render driver needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    pub planet: Mat4,
    /// The starfield quad is authored in world space.
    pub background: Mat4,
    pub rovers: [RoverPose; ACTOR_COUNT],
    pub proxies: [Vec3; ACTOR_COUNT],
    pub view: Mat4,
    pub lens: Lens,
    pub collision: bool,
}

impl SceneFrame {
    pub fn rover(&self, actor: ActorId) -> &RoverPose {
        &self.rovers[actor.index()]
    }
}

/// One step of the scene: camera toggles, player drive, free-fly camera,
/// orbiter, homer, composition, then collision.
///
/// Motion is gated on the collision flag left by the previous step; the
/// flag computed here gates the next one.
pub fn advance_frame(
    state: &mut SceneState,
    input: &InputSnapshot,
    settings: &SceneSettings,
    elapsed_secs: f32,
) -> SceneFrame {
    let planet = planet_transform();
    let colliding = state.collision;

    for _ in 0..input.camera_toggles {
        state.camera.toggle_mode();
    }

    let player_motion = apply_player_motion(
        state.accumulator_mut(ActorId::Player),
        &ActorId::Player.rig(),
        &input.held,
        colliding,
        settings.player_step_radians(),
    );
    state.set_wheel_motion(ActorId::Player, player_motion);

    apply_camera_keys(&mut state.camera, &input.held, settings.camera_step);

    let orbiter_motion = advance_orbiter(
        state.accumulator_mut(ActorId::Orbiter),
        &ActorId::Orbiter.rig(),
        settings.orbit_step_radians(),
        colliding,
    );
    state.set_wheel_motion(ActorId::Orbiter, orbiter_motion);

    // The homer chases where the player is now, not where it was.
    state.refresh_proxy(planet, ActorId::Player);
    let player_position = state.proxy(ActorId::Player);
    let homer_motion = advance_homer(
        state.accumulator_mut(ActorId::Homer),
        player_position,
        settings.homing_gain,
        settings.homing_mode,
        colliding,
    );
    state.set_wheel_motion(ActorId::Homer, homer_motion);

    state.refresh_proxies(planet);
    let wheel_params = settings.wheel_params();
    let rovers = ActorId::ALL.map(|actor| {
        compose_rover(
            planet,
            actor,
            state.accumulator(actor),
            state.wheel_motion(actor),
            elapsed_secs,
            &wheel_params,
        )
    });

    let collision = detect_collision(state.proxies(), settings.collision_half_extent);
    if collision != state.collision {
        debug!("Collision flag changed to {}", collision);
    }
    state.collision = collision;

    let player_chain = actor_chain(
        planet,
        state.accumulator(ActorId::Player),
        &ActorId::Player.rig(),
    );
    let view = state
        .camera
        .view_matrix(player_chain, input.mouse, settings.chase_mouse_bias);

    SceneFrame {
        planet,
        background: Mat4::IDENTITY,
        rovers,
        proxies: *state.proxies(),
        view,
        lens: Lens::for_viewport(input.viewport),
        collision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::rig::CameraMode;
    use crate::engine::input::keys::SceneKey;
    use crate::engine::scene::rotation::RotationAccumulator;
    use crate::engine::scene::transform::WheelMotion;

    fn settings() -> SceneSettings {
        SceneSettings::default()
    }

    /// Player moved on top of the orbiter's starting spot.
    fn colliding_state() -> SceneState {
        let mut state = SceneState::default();
        state
            .accumulator_mut(ActorId::Player)
            .rotate(std::f32::consts::PI, Vec3::Z);
        state
    }

    #[test]
    fn idle_frame_moves_only_the_autonomous_rovers() {
        let mut state = SceneState::default();
        let frame = advance_frame(&mut state, &InputSnapshot::default(), &settings(), 0.0);

        assert_eq!(*state.accumulator(ActorId::Player), RotationAccumulator::IDENTITY);
        assert_ne!(*state.accumulator(ActorId::Orbiter), RotationAccumulator::IDENTITY);
        assert_ne!(*state.accumulator(ActorId::Homer), RotationAccumulator::IDENTITY);
        assert_eq!(state.wheel_motion(ActorId::Player), WheelMotion::Idle);
        assert_eq!(state.wheel_motion(ActorId::Orbiter), WheelMotion::Forward);
        assert!(!frame.collision);
    }

    #[test]
    fn forward_key_advances_the_player_one_step() {
        let mut state = SceneState::default();
        let input = InputSnapshot::with_held([SceneKey::DriveForward]);
        advance_frame(&mut state, &input, &settings(), 0.0);

        let expected = Mat4::from_axis_angle(Vec3::Z, 2f32.to_radians());
        assert!(
            state
                .accumulator(ActorId::Player)
                .matrix()
                .abs_diff_eq(expected, 1e-6)
        );
        assert_eq!(state.wheel_motion(ActorId::Player), WheelMotion::Forward);
    }

    #[test]
    fn overlap_raises_the_flag_for_the_next_frame() {
        let mut state = colliding_state();
        let frame = advance_frame(&mut state, &InputSnapshot::default(), &settings(), 0.0);
        assert!(frame.collision);
        assert!(state.collision);
    }

    #[test]
    fn collision_freezes_every_rover() {
        let mut state = colliding_state();
        advance_frame(&mut state, &InputSnapshot::default(), &settings(), 0.0);
        assert!(state.collision);

        let before = state.clone();
        let input = InputSnapshot::with_held([SceneKey::DriveForward, SceneKey::TurnLeft]);
        let frame = advance_frame(&mut state, &input, &settings(), 1.0);

        for actor in ActorId::ALL {
            assert_eq!(state.accumulator(actor), before.accumulator(actor));
            assert_eq!(state.wheel_motion(actor), WheelMotion::Idle);
        }
        assert!(frame.collision);
    }

    #[test]
    fn identical_state_gives_identical_frames() {
        let input = InputSnapshot::with_held([SceneKey::TurnRight, SceneKey::CameraUp]);
        let mut first = colliding_state();
        let mut second = colliding_state();
        let a = advance_frame(&mut first, &input, &settings(), 2.5);
        let b = advance_frame(&mut second, &input, &settings(), 2.5);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn frame_reports_fresh_proxies() {
        let mut state = SceneState::default();
        let input = InputSnapshot::with_held([SceneKey::DriveForward]);
        let frame = advance_frame(&mut state, &input, &settings(), 0.0);
        assert_eq!(frame.proxies, *state.proxies());
        assert_eq!(frame.background, Mat4::IDENTITY);
        assert_eq!(frame.planet, planet_transform());
    }

    #[test]
    fn camera_toggle_switches_to_chase() {
        let mut state = SceneState::default();
        let input = InputSnapshot {
            camera_toggles: 1,
            ..default()
        };
        advance_frame(&mut state, &input, &settings(), 0.0);
        assert_eq!(state.camera.mode, CameraMode::Chase);

        // Camera keys do nothing in chase mode.
        let start = state.camera.free_offset;
        let input = InputSnapshot::with_held([SceneKey::CameraRight]);
        advance_frame(&mut state, &input, &settings(), 0.0);
        assert_eq!(state.camera.free_offset, start);
    }

    #[test]
    fn free_fly_camera_moves_with_held_keys() {
        let mut state = SceneState::default();
        let start = state.camera.free_offset;
        let input = InputSnapshot::with_held([SceneKey::CameraIn]);
        advance_frame(&mut state, &input, &settings(), 0.0);
        assert!(
            state
                .camera
                .free_offset
                .abs_diff_eq(start + Vec3::new(0.0, 0.0, 0.01), 1e-6)
        );
    }

    #[test]
    fn lens_tracks_the_viewport() {
        let mut state = SceneState::default();
        let input = InputSnapshot {
            viewport: UVec2::new(1200, 600),
            ..default()
        };
        let frame = advance_frame(&mut state, &input, &settings(), 0.0);
        assert_eq!(frame.lens.aspect_ratio, 2.0);
    }
}
