//! Per-frame scene pipeline.
//!
//! Everything in here is plain math over `Mat4` / `Vec3` so it can be driven
//! from a Bevy system or from a unit test without an `App`.

/// Actor identities and their fixed placement on the planet.
pub mod actor;

/// Autonomous controllers for the two non-player rovers.
pub mod actors;

/// Axis-aligned box overlap between actor proxies.
pub mod collision;

/// Frame step: input, motion, actors, composition, collision, in that order.
pub mod frame;

/// Accumulated rotation matrices.
pub mod rotation;

/// Owned per-run scene state.
pub mod state;

/// Hierarchical planet → rover → wheel model matrices.
pub mod transform;
