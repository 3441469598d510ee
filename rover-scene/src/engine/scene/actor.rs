use bevy::prelude::*;
use constants::scene::{HOMER_OFFSET, ORBITER_OFFSET, PLAYER_OFFSET};

pub const ACTOR_COUNT: usize = 3;

/// The three rovers on the planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    /// Driven by the keyboard.
    Player,
    /// Circles the planet at constant speed.
    Orbiter,
    /// Steers toward the player.
    Homer,
}

impl ActorId {
    pub const ALL: [ActorId; ACTOR_COUNT] = [ActorId::Player, ActorId::Orbiter, ActorId::Homer];

    pub fn index(self) -> usize {
        match self {
            ActorId::Player => 0,
            ActorId::Orbiter => 1,
            ActorId::Homer => 2,
        }
    }

    pub fn rig(self) -> ActorRig {
        match self {
            ActorId::Player => ActorRig {
                offset: PLAYER_OFFSET,
                forward_axis: Vec3::Z,
                turn_axis: Vec3::Y,
            },
            ActorId::Orbiter => ActorRig {
                offset: ORBITER_OFFSET,
                forward_axis: Vec3::Z,
                turn_axis: Vec3::Y,
            },
            ActorId::Homer => ActorRig {
                offset: HOMER_OFFSET,
                forward_axis: Vec3::X,
                turn_axis: Vec3::Y,
            },
        }
    }
}

/// Fixed placement of a rover relative to the planet centre.
///
/// `forward_axis` and `turn_axis` are the two planet tangents the rover
/// rotates about when driving and steering; both are perpendicular to the
/// radial direction given by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorRig {
    pub offset: Vec3,
    pub forward_axis: Vec3,
    pub turn_axis: Vec3,
}

impl ActorRig {
    /// Outward direction from the planet centre, i.e. the rover's "up".
    pub fn radial(&self) -> Vec3 {
        self.offset.normalize_or_zero()
    }
}
