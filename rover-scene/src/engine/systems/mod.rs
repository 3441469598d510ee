//! Runtime systems: the per-frame scene loop and on-screen diagnostics.

/// FPS and scene status overlays.
///
/// Updates the native text overlays from frame diagnostics and the scene state.
pub mod fps_tracking;

/// Input collection, frame step and draw list application, chained in order.
pub mod frame_loop;
