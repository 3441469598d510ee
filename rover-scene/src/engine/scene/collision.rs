use bevy::prelude::*;

use super::actor::{ACTOR_COUNT, ActorId};

/// Axis-aligned box given by its per-axis extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn around(center: Vec3, half_extent: f32) -> Self {
        let half = Vec3::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Closed-interval overlap on every axis; touching faces count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

/// Player against each autonomous rover. The two autonomous rovers are not
/// tested against each other.
pub fn detect_collision(proxies: &[Vec3; ACTOR_COUNT], half_extent: f32) -> bool {
    let boxes = proxies.map(|center| Aabb::around(center, half_extent));
    let player = &boxes[ActorId::Player.index()];

    player.overlaps(&boxes[ActorId::Orbiter.index()])
        || player.overlaps(&boxes[ActorId::Homer.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: f32 = 0.055;

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = Aabb::around(Vec3::ZERO, HALF);
        let b = Aabb::around(Vec3::new(0.2, 0.0, 0.0), HALF);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn close_boxes_overlap() {
        let a = Aabb::around(Vec3::ZERO, HALF);
        let b = Aabb::around(Vec3::new(0.05, 0.0, 0.0), HALF);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn overlap_needs_every_axis() {
        let a = Aabb::around(Vec3::ZERO, HALF);
        let b = Aabb::around(Vec3::new(0.05, 0.05, 0.3), HALF);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let centers = [
            Vec3::ZERO,
            Vec3::new(0.05, 0.0, 0.0),
            Vec3::new(0.2, 0.0, 0.0),
            Vec3::new(-0.1, 0.1, 0.0),
            Vec3::new(0.0, -0.03, 0.09),
        ];
        for a in centers {
            for b in centers {
                let box_a = Aabb::around(a, HALF);
                let box_b = Aabb::around(b, HALF);
                assert_eq!(box_a.overlaps(&box_b), box_b.overlaps(&box_a));
            }
        }
    }

    #[test]
    fn orbiter_and_homer_are_not_tested_against_each_other() {
        let proxies = [Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO];
        assert!(!detect_collision(&proxies, HALF));
    }

    #[test]
    fn player_hits_either_autonomous_rover() {
        let near = Vec3::new(0.52, 0.0, 0.0);
        let far = Vec3::new(-0.5, 0.0, 0.0);
        let player = Vec3::new(0.5, 0.0, 0.0);
        assert!(detect_collision(&[player, near, far], HALF));
        assert!(detect_collision(&[player, far, near], HALF));
    }

    #[test]
    fn same_proxies_give_the_same_answer() {
        let proxies = [
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.45, 0.06, 0.0),
            Vec3::new(0.0, 0.0, -0.5),
        ];
        let first = detect_collision(&proxies, HALF);
        for _ in 0..10 {
            assert_eq!(detect_collision(&proxies, HALF), first);
        }
    }
}
