//! Game state and core simulation types
//!
//! Everything the loop mutates lives here: the two planes, the pending drag
//! gesture and the debug/exit flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which of the two planes an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneKind {
    /// Steered with the left mouse button
    Big,
    /// Steered with the right mouse button
    Small,
}

impl PlaneKind {
    /// Drag displacement divisor giving this plane's velocity
    pub fn drag_divisor(self) -> f32 {
        match self {
            PlaneKind::Big => BIG_PLANE_DRAG_DIVISOR,
            PlaneKind::Small => SMALL_PLANE_DRAG_DIVISOR,
        }
    }
}

/// Integer pixel rectangle (texture source crop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl IntRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Sprite crop from the shared planes texture, anchored at its centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub source: IntRect,
}

impl SpriteFrame {
    pub const fn new(source: IntRect) -> Self {
        Self { source }
    }

    /// Unrotated sprite size in pixels
    pub fn size(&self) -> Vec2 {
        self.source.size()
    }

    /// Anchor offset from the top-left of the crop
    pub fn origin(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Radius of the circle that encloses the longer side
    pub fn bounding_radius(&self) -> f32 {
        self.size().max_element() / 2.0
    }
}

/// Big plane crop inside planes.png
pub const BIG_PLANE_FRAME: SpriteFrame = SpriteFrame::new(IntRect::new(3, 11, 104, 93));
/// Small plane crop inside planes.png
pub const SMALL_PLANE_FRAME: SpriteFrame = SpriteFrame::new(IntRect::new(362, 115, 87, 69));

/// A plane entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Degrees, 0 = screen-up
    pub heading: f32,
    /// Collision radius, fixed at setup
    pub radius: f32,
    pub sprite: SpriteFrame,
}

impl Entity {
    /// Create an entity whose collision radius is derived from its sprite
    pub fn new(pos: Vec2, vel: Vec2, heading: f32, sprite: SpriteFrame) -> Self {
        Self {
            pos,
            vel,
            heading,
            radius: sprite.bounding_radius(),
            sprite,
        }
    }

    /// Set heading and velocity (drag gesture result)
    pub fn steer(&mut self, heading: f32, vel: Vec2) {
        self.heading = heading;
        self.vel = vel;
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

/// Mouse press waiting for its release
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub mouse_down: Vec2,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub big: Entity,
    pub small: Entity,
    /// Clamp bounds (window size in pixels)
    pub bounds: Vec2,
    pub drag: DragGesture,
    /// Draw collision/bounds overlays
    pub debug: bool,
    /// Set by Escape or window close; acted on by the next tick
    pub exit_requested: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Starting layout for a window of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            big: Entity::new(
                Vec2::new(200.0, 200.0),
                Vec2::new(1.0, -1.0),
                45.0,
                BIG_PLANE_FRAME,
            ),
            small: Entity::new(
                Vec2::new(600.0, 0.0),
                Vec2::new(-1.6, 1.6),
                225.0,
                SMALL_PLANE_FRAME,
            ),
            bounds: Vec2::new(width as f32, height as f32),
            drag: DragGesture::default(),
            debug: false,
            exit_requested: false,
            time_ticks: 0,
        }
    }

    pub fn plane(&self, kind: PlaneKind) -> &Entity {
        match kind {
            PlaneKind::Big => &self.big,
            PlaneKind::Small => &self.small,
        }
    }

    pub fn plane_mut(&mut self, kind: PlaneKind) -> &mut Entity {
        match kind {
            PlaneKind::Big => &mut self.big,
            PlaneKind::Small => &mut self.small,
        }
    }

    /// Both planes in draw order
    pub fn planes(&self) -> [&Entity; 2] {
        [&self.big, &self.small]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_from_longer_side() {
        assert_eq!(BIG_PLANE_FRAME.bounding_radius(), 52.0);
        assert_eq!(SMALL_PLANE_FRAME.bounding_radius(), 43.5);

        let tall = SpriteFrame::new(IntRect::new(0, 0, 10, 30));
        assert_eq!(tall.bounding_radius(), 15.0);
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::default();
        assert_eq!(state.big.pos, Vec2::new(200.0, 200.0));
        assert_eq!(state.big.vel, Vec2::new(1.0, -1.0));
        assert_eq!(state.big.heading, 45.0);
        assert_eq!(state.small.pos, Vec2::new(600.0, 0.0));
        assert_eq!(state.small.vel, Vec2::new(-1.6, 1.6));
        assert_eq!(state.small.heading, 225.0);
        assert_eq!(state.bounds, Vec2::new(1000.0, 800.0));
        assert!(!state.debug);
        assert!(!state.exit_requested);
    }

    #[test]
    fn test_plane_lookup() {
        let mut state = GameState::default();
        state.plane_mut(PlaneKind::Small).stop();
        assert_eq!(state.plane(PlaneKind::Small).vel, Vec2::ZERO);
        assert_eq!(state.plane(PlaneKind::Big).vel, Vec2::new(1.0, -1.0));
    }
}
