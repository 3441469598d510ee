use bevy::math::IVec2;

pub const WINDOW_TITLE: &str = "Mars Rovers";
pub const WINDOW_SIZE: f32 = 960.0;
pub const WINDOW_POSITION: IVec2 = IVec2::new(10, 50);

/// Fragments with alpha below this are discarded.
pub const ALPHA_CUTOFF: f32 = 0.1;

/// Tessellation of the parametric planet sphere.
pub const SPHERE_SLICES: u32 = 128;
pub const SPHERE_STACKS: u32 = 128;
