use bevy::prelude::*;

use crate::engine::scene::actor::ActorId;
use crate::engine::scene::frame::SceneFrame;
use crate::engine::scene::transform::WHEEL_COUNT;

/// A drawable piece of the scene.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    Background,
    Planet,
    RoverBody(ActorId),
    Wheel(ActorId, usize),
}

impl PartId {
    pub fn mesh(self) -> MeshKind {
        match self {
            PartId::Background => MeshKind::StarfieldQuad,
            PartId::Planet => MeshKind::Sphere,
            PartId::RoverBody(_) | PartId::Wheel(..) => MeshKind::Cube,
        }
    }

    pub fn texture(self) -> TextureKind {
        match self {
            PartId::Background => TextureKind::Starfield,
            PartId::Planet => TextureKind::Planet,
            PartId::RoverBody(_) | PartId::Wheel(..) => TextureKind::Rover,
        }
    }

    /// Every part in draw order: background, planet, then each rover's body
    /// followed by its wheels.
    pub fn all() -> impl Iterator<Item = PartId> {
        [PartId::Background, PartId::Planet]
            .into_iter()
            .chain(ActorId::ALL.into_iter().flat_map(|actor| {
                std::iter::once(PartId::RoverBody(actor))
                    .chain((0..WHEEL_COUNT).map(move |wheel| PartId::Wheel(actor, wheel)))
            }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Sphere,
    Cube,
    StarfieldQuad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Planet,
    Rover,
    Starfield,
}

/// "Draw this part with this transform and texture."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub part: PartId,
    pub mesh: MeshKind,
    pub texture: TextureKind,
    pub model: Mat4,
    pub projection: Mat4,
    pub camera: Mat4,
}

/// Receiver of draw calls. The Bevy side implements this with a list that
/// a system later applies to entity transforms.
pub trait RenderSink {
    fn submit(&mut self, call: DrawCall);
}

impl RenderSink for Vec<DrawCall> {
    fn submit(&mut self, call: DrawCall) {
        self.push(call);
    }
}

fn model_for(frame: &SceneFrame, part: PartId) -> Mat4 {
    match part {
        PartId::Background => frame.background,
        PartId::Planet => frame.planet,
        PartId::RoverBody(actor) => frame.rover(actor).body,
        PartId::Wheel(actor, wheel) => frame.rover(actor).wheels[wheel % WHEEL_COUNT],
    }
}

/// Submit one draw call per scene part.
pub fn render_frame(frame: &SceneFrame, sink: &mut impl RenderSink) {
    let projection = frame.lens.projection();
    for part in PartId::all() {
        sink.submit(DrawCall {
            part,
            mesh: part.mesh(),
            texture: part.texture(),
            model: model_for(frame, part),
            projection,
            camera: frame.view,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_settings::SceneSettings;
    use crate::engine::input::state::InputSnapshot;
    use crate::engine::scene::frame::advance_frame;
    use crate::engine::scene::state::SceneState;

    fn frame() -> SceneFrame {
        let mut state = SceneState::default();
        advance_frame(
            &mut state,
            &InputSnapshot::default(),
            &SceneSettings::default(),
            0.5,
        )
    }

    #[test]
    fn every_part_is_drawn_once() {
        let mut calls = Vec::new();
        render_frame(&frame(), &mut calls);

        assert_eq!(calls.len(), 2 + ActorId::ALL.len() * (1 + WHEEL_COUNT));
        let unique: std::collections::HashSet<_> = calls.iter().map(|call| call.part).collect();
        assert_eq!(unique.len(), calls.len());
    }

    #[test]
    fn background_is_drawn_first() {
        let mut calls = Vec::new();
        render_frame(&frame(), &mut calls);
        assert_eq!(calls[0].part, PartId::Background);
        assert_eq!(calls[1].part, PartId::Planet);
    }

    #[test]
    fn calls_carry_the_frame_matrices() {
        let frame = frame();
        let mut calls = Vec::new();
        render_frame(&frame, &mut calls);

        for call in &calls {
            assert_eq!(call.camera, frame.view);
            assert_eq!(call.projection, frame.lens.projection());
            assert_eq!(call.mesh, call.part.mesh());
            assert_eq!(call.texture, call.part.texture());
        }
        let homer_wheel = calls
            .iter()
            .find(|call| call.part == PartId::Wheel(ActorId::Homer, 3))
            .map(|call| call.model);
        assert_eq!(homer_wheel, Some(frame.rover(ActorId::Homer).wheels[3]));
    }
}
