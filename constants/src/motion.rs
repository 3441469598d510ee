/// Player rotation per frame while a drive key is held.
pub const PLAYER_STEP_DEGREES: f32 = 2.0;

/// Constant orbit increment for the second rover.
pub const ORBIT_STEP_DEGREES: f32 = 0.5;

/// Gain applied to the third rover's bearing angles (radians in, radians out).
pub const HOMING_GAIN: f32 = 0.001;

/// Free-fly camera offset change per frame while a camera key is held.
pub const CAMERA_STEP: f32 = 0.01;
