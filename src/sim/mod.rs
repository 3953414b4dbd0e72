//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the window,
//! the GPU or the wall clock:
//! - Fixed timestep only (the caller supplies `dt`)
//! - Input arrives as backend-neutral [`InputEvent`]s
//! - Rendering reads [`GameState`] but never writes it

pub mod collision;
pub mod input;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{
    Aabb, CollisionPolicy, bounding_boxes_collide, circles_collide, entities_collide,
    sprite_corners, world_bounds,
};
pub use input::{InputEvent, Key, MouseButton, Steering, drag_steering, handle_event};
pub use motion::{apply_velocity, keep_on_screen};
pub use state::{
    BIG_PLANE_FRAME, DragGesture, Entity, GameState, IntRect, PlaneKind, SMALL_PLANE_FRAME,
    SpriteFrame,
};
pub use tick::{SimConfig, TickReport, tick};
