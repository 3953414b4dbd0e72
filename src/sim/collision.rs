//! Collision detection between the two planes
//!
//! Two tests are available: the circle (distance) test the update uses, and a
//! bounding-box test over the world-space boxes of the rotated sprites.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;
use crate::distance;

/// Which overlap test decides a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Circles at the collision radius
    #[default]
    Distance,
    /// Axis-aligned boxes around the rotated sprites
    BoundingBox,
}

impl CollisionPolicy {
    pub fn collides(self, a: &Entity, b: &Entity) -> bool {
        match self {
            CollisionPolicy::Distance => entities_collide(a, b),
            CollisionPolicy::BoundingBox => bounding_boxes_collide(a, b),
        }
    }
}

/// Axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Smallest box containing every point
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for &p in points {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        let inter_min = self.min.max(other.min);
        let inter_max = self.max.min(other.max);
        inter_min.x < inter_max.x && inter_min.y < inter_max.y
    }
}

/// Corners of the entity's sprite rectangle after rotation about its origin
///
/// Order: top-left, top-right, bottom-right, bottom-left (sprite-local).
pub fn sprite_corners(entity: &Entity) -> [Vec2; 4] {
    let size = entity.sprite.size();
    let origin = entity.sprite.origin();
    let rotation = Vec2::from_angle(entity.heading.to_radians());
    [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ]
    .map(|corner| entity.pos + rotation.rotate(corner - origin))
}

/// World-space axis-aligned bounds of the rotated sprite
pub fn world_bounds(entity: &Entity) -> Aabb {
    Aabb::from_points(&sprite_corners(entity))
}

/// Circle overlap: true iff the centres are closer than the sum of the radii
pub fn circles_collide(pos1: Vec2, radius1: f32, pos2: Vec2, radius2: f32) -> bool {
    let minimum_safe_distance = radius1 + radius2;
    distance(pos1, pos2) < minimum_safe_distance
}

/// Distance test between two entities
pub fn entities_collide(a: &Entity, b: &Entity) -> bool {
    circles_collide(a.pos, a.radius, b.pos, b.radius)
}

/// Bounding-box test between two entities
pub fn bounding_boxes_collide(a: &Entity, b: &Entity) -> bool {
    world_bounds(a).intersects(&world_bounds(b))
}
