use bevy::math::Vec3;

/// Uniform scale applied to the planet sphere (unit radius mesh).
pub const PLANET_SCALE: f32 = 0.5;

/// Uniform scale applied to every rover body before it is placed.
pub const ROVER_SCALE: f32 = 0.08;

/// Rover placement in planet-local units, one per actor.
pub const PLAYER_OFFSET: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const ORBITER_OFFSET: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub const HOMER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Yaw applied to the player body only, so its texture faces the direction of travel.
pub const PLAYER_BODY_YAW_DEGREES: f32 = 90.0;

/// Rover-local point used as the actor's world position (collision centre, homing target).
pub const PROXY_ANCHOR: Vec3 = Vec3::ZERO;

/// Wheel footprint in rover-local units (body cube spans -0.5..0.5).
pub const WHEEL_DIAMETER: f32 = 0.35;
pub const WHEEL_WIDTH: f32 = 0.1;
pub const WHEEL_INSET: f32 = 0.5;

/// Rolling spin in degrees per second of wall-clock time.
pub const WHEEL_SPIN_DEGREES_PER_SECOND: f32 = 50.0;

/// Steering tilt about the rover's vertical axis while turning.
pub const WHEEL_STEER_DEGREES: f32 = 20.0;

/// Half-extent of the axis-aligned box built around each actor proxy.
pub const COLLISION_HALF_EXTENT: f32 = 0.055;

/// Starfield quad corners (world space, behind the planet).
pub const STARFIELD_CORNERS: [[f32; 3]; 4] = [
    [-3.0, -3.0, 1.9],
    [3.0, -3.0, 1.9],
    [3.0, 3.0, 1.9],
    [-3.0, 3.0, 1.9],
];
