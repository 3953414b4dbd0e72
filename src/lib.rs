//! Air Crash - two planes steered by mouse drags
//!
//! Core modules:
//! - `sim`: Simulation state, input mapping, motion and collision
//! - `timestep`: Fixed-step accumulator and wall clocks
//! - `game_loop`: The poll / update / render loop
//! - `renderer`: Scene construction and the wgpu pipeline
//! - `platform`: Window + event source abstraction (winit backed)
//! - `assets`: Font and image loading
//! - `settings`: Runtime configuration

pub mod assets;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timestep;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default window size in pixels
    pub const SCREEN_WIDTH: u32 = 1000;
    pub const SCREEN_HEIGHT: u32 = 800;

    /// Simulation updates per second
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fastest update rate that still has a whole-millisecond step
    pub const MAX_TICKS_PER_SECOND: u32 = 1000;
    /// Whole milliseconds a 60 Hz step truncates to; anything else is a "time warp"
    pub const EXPECTED_STEP_MS: u128 = 16;

    /// Drag displacement is divided by these to get a velocity (pixels per tick)
    pub const BIG_PLANE_DRAG_DIVISOR: f32 = 100.0;
    pub const SMALL_PLANE_DRAG_DIVISOR: f32 = 50.0;

    /// Headings are measured from screen-up, atan2 from screen-right
    pub const HEADING_OFFSET_DEGREES: f32 = 90.0;

    /// Debug overlay sizes
    pub const DEBUG_DOT_RADIUS: f32 = 4.0;
    pub const DEBUG_OUTLINE_THICKNESS: f32 = 2.0;
}

/// Length of a 2D vector
#[inline]
pub fn vector_length(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    vector_length(a - b)
}

/// Heading in degrees for a drag displacement (0° = screen-up, clockwise positive)
#[inline]
pub fn heading_degrees(displacement: Vec2) -> f32 {
    displacement.y.atan2(displacement.x).to_degrees() + consts::HEADING_OFFSET_DEGREES
}
