use bevy::prelude::*;

use super::driver::{DrawCall, PartId, RenderSink};
use crate::engine::camera::rig::Lens;

/// Draw calls collected for the current frame, applied to entities afterwards.
#[derive(Resource, Debug, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
    lens: Lens,
}

impl DrawList {
    /// Drop last frame's calls.
    pub fn begin(&mut self, lens: Lens) {
        self.calls.clear();
        self.lens = lens;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn lens(&self) -> Lens {
        self.lens
    }

    /// Camera matrix shared by every call this frame.
    pub fn camera(&self) -> Option<Mat4> {
        self.calls.first().map(|call| call.camera)
    }

    pub fn find(&self, part: PartId) -> Option<&DrawCall> {
        self.calls.iter().find(|call| call.part == part)
    }
}

impl RenderSink for DrawList {
    fn submit(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}
