//! Keyboard and mouse state consumed by the frame step.
//!
//! Raw Bevy events are translated into [`keys::KeyEvent`]s and folded into an
//! [`state::InputState`]; once per frame the state hands out an
//! [`state::InputSnapshot`] that the scene reads without touching Bevy.

/// Scene key identities, key actions and the Bevy key binding.
pub mod keys;

/// Player drive and free-fly camera mapping.
pub mod motion;

/// Held-key set, camera toggle latch and normalized mouse.
pub mod state;
