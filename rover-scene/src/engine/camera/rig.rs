use bevy::prelude::*;
use constants::camera::{
    CAMERA_UP, CHASE_EYE_ANCHOR, CHASE_TARGET_ANCHOR, FAR_PLANE, FIELD_OF_VIEW_DEGREES,
    FREE_CAMERA_START, NEAR_PLANE,
};

const DEGENERATE_EPSILON: f32 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Eye at `free_offset`, looking at the mouse on the z = 0 plane.
    #[default]
    FreeFly,
    /// Eye and target ride along with the player rover.
    Chase,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FreeFly => CameraMode::Chase,
            CameraMode::Chase => CameraMode::FreeFly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::FreeFly => "free-fly",
            CameraMode::Chase => "chase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub free_offset: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: CameraMode::FreeFly,
            free_offset: FREE_CAMERA_START,
        }
    }
}

impl CameraRig {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Eye and target in world space.
    ///
    /// `player_chain` is `planet × accumulator × base` of the player rover.
    /// In chase mode the mouse nudges the target by `chase_mouse_bias`.
    pub fn eye_and_target(&self, player_chain: Mat4, mouse: Vec2, chase_mouse_bias: f32) -> (Vec3, Vec3) {
        match self.mode {
            CameraMode::FreeFly => (self.free_offset, mouse.extend(0.0)),
            CameraMode::Chase => {
                let eye = player_chain.transform_point3(CHASE_EYE_ANCHOR);
                let target = player_chain.transform_point3(CHASE_TARGET_ANCHOR)
                    + mouse.extend(0.0) * chase_mouse_bias;
                (eye, target)
            }
        }
    }

    pub fn view_matrix(&self, player_chain: Mat4, mouse: Vec2, chase_mouse_bias: f32) -> Mat4 {
        let (eye, target) = self.eye_and_target(player_chain, mouse, chase_mouse_bias);
        look_at(eye, target, CAMERA_UP)
    }
}

/// Right-handed look-at that never returns NaN.
///
/// A target on top of the eye looks down +Z; a view direction parallel to
/// `up` swaps in +Z as the up vector.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    if !eye.is_finite() || !target.is_finite() {
        return Mat4::look_at_rh(FREE_CAMERA_START, Vec3::ZERO, CAMERA_UP);
    }

    let mut direction = target - eye;
    if direction.length_squared() < DEGENERATE_EPSILON {
        direction = Vec3::Z;
    }
    let direction = direction.normalize();
    let up = if direction.cross(up).length_squared() < DEGENERATE_EPSILON {
        Vec3::Z
    } else {
        up
    };
    Mat4::look_at_rh(eye, eye + direction, up)
}

/// Perspective parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub fov_y_radians: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y_radians: FIELD_OF_VIEW_DEGREES.to_radians(),
            aspect_ratio: 1.0,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

impl Lens {
    /// Aspect from the viewport; an empty viewport keeps a square aspect.
    pub fn for_viewport(viewport: UVec2) -> Self {
        let aspect_ratio = if viewport.x == 0 || viewport.y == 0 {
            1.0
        } else {
            viewport.x as f32 / viewport.y as f32
        };
        Self {
            aspect_ratio,
            ..default()
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.aspect_ratio, self.near, self.far)
    }
}
