use bevy::math::Vec3;

/// Free-fly eye position at startup.
pub const FREE_CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, -3.0);

/// Chase camera eye, in player rover-local units.
pub const CHASE_EYE_ANCHOR: Vec3 = Vec3::new(3.0, -2.0, 0.0);

/// Chase camera target, in player rover-local units.
pub const CHASE_TARGET_ANCHOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

pub const CAMERA_UP: Vec3 = Vec3::Y;

pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 10.0;
