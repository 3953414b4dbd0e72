//! Entity motion and screen clamping

use glam::Vec2;

use super::state::Entity;

/// Advance position by one tick of velocity (Euler, no acceleration)
#[inline]
pub fn apply_velocity(entity: &mut Entity) {
    entity.pos += entity.vel;
}

/// Clamp a position into `[0, bounds.x] × [0, bounds.y]`
///
/// Axes are clamped independently. Velocity is not touched, so an entity can
/// sit pinned against an edge while still heading outward.
#[inline]
pub fn keep_on_screen(pos: &mut Vec2, bounds: Vec2) {
    if pos.x < 0.0 {
        pos.x = 0.0;
    }
    if pos.x > bounds.x {
        pos.x = bounds.x;
    }
    if pos.y < 0.0 {
        pos.y = 0.0;
    }
    if pos.y > bounds.y {
        pos.y = bounds.y;
    }
}
