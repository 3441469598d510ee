use bevy::prelude::*;

/// Total rotation applied to an actor since startup.
///
/// Only ever grown by right-multiplying axis-angle rotations, so it stays
/// orthonormal up to float drift. It is never re-orthonormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAccumulator(Mat4);

impl Default for RotationAccumulator {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RotationAccumulator {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// `self = self × rotate(angle, axis)`. Zero, non-finite angles and
    /// degenerate axes leave the accumulator untouched.
    pub fn rotate(&mut self, angle_radians: f32, axis: Vec3) {
        if angle_radians == 0.0 || !angle_radians.is_finite() {
            return;
        }
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.0 *= Mat4::from_axis_angle(axis, angle_radians);
    }
}
