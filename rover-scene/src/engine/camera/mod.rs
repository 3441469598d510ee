//! Scene camera: free-fly and chase modes, view and projection matrices.

/// Camera mode, free-fly offsets, look-at and lens.
pub mod rig;
